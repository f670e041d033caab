//! CLI for renaming CCDC inject PDFs after their inject number and subject.
//!
//! ```text
//! auto-injector '*.pdf'
//! ```
//!
//! Quote the pattern so the glob is expanded here rather than by the shell.

use std::path::PathBuf;
use std::process;

use autoinjector::{
    InjectRenamer, LopdfConverter, Pdftotext, RenameOutcome, RenamerConfig, Result,
    TextConverter,
};
use clap::{Parser, ValueEnum};

#[derive(Parser)]
#[command(
    name = "auto-injector",
    version,
    about = "Rename inject PDFs to \"<number> <subject>.pdf\" based on their content"
)]
struct Cli {
    /// Glob pattern matching the PDFs to rename, e.g. "injects/*.pdf"
    pattern: String,

    /// Backend used to turn each PDF into text
    #[arg(long, value_enum, default_value_t = Backend::Pdftotext)]
    converter: Backend,

    /// Path to the pdftotext executable
    #[arg(long, value_name = "PATH", default_value = "pdftotext")]
    pdftotext: PathBuf,

    /// Print the new names without renaming anything
    #[arg(long)]
    dry_run: bool,

    /// Leave the scratch directory with the extracted text on disk
    #[arg(long)]
    keep_scratch: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Backend {
    /// Poppler's pdftotext, run once per file
    Pdftotext,
    /// Built-in extraction, no external program needed
    Lopdf,
}

fn main() {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let converter: Box<dyn TextConverter> = match cli.converter {
        Backend::Pdftotext => Box::new(Pdftotext::with_program(&cli.pdftotext)),
        Backend::Lopdf => Box::new(LopdfConverter),
    };

    let config = RenamerConfig {
        dry_run: cli.dry_run,
        keep_scratch: cli.keep_scratch,
        scratch_parent: None,
    };

    if let Err(e) = run(&cli.pattern, converter, config) {
        eprintln!("auto-injector: error: {e}");
        process::exit(1);
    }
}

fn run(pattern: &str, converter: Box<dyn TextConverter>, config: RenamerConfig) -> Result<()> {
    let dry_run = config.dry_run;
    let outcomes = InjectRenamer::new(converter, config).run(pattern)?;

    for outcome in &outcomes {
        print_outcome(outcome, dry_run);
    }

    let renamed = outcomes.iter().filter(|o| o.renamed).count();
    if dry_run {
        println!("{} file(s) matched, dry run: nothing renamed", outcomes.len());
    } else {
        println!("{} file(s) matched, {renamed} renamed", outcomes.len());
    }

    Ok(())
}

fn print_outcome(outcome: &RenameOutcome, dry_run: bool) {
    let marker = if dry_run {
        "would rename"
    } else if outcome.renamed {
        "renamed"
    } else {
        "unchanged"
    };
    println!(
        "{marker}: {} -> {}",
        outcome.source.display(),
        outcome.destination.display()
    );
}
