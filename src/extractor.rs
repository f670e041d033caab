use std::collections::HashMap;
use std::path::{Path, PathBuf};

use glob::MatchOptions;

use crate::{InjectError, Result, ScratchDir, TextConverter};

/// One converted PDF: where it lives and where its text was written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub source: PathBuf,
    pub text: PathBuf,
}

/// Expand `pattern` into the files it matches, in glob enumeration order.
///
/// Wildcards do not match a leading `.`, so hidden files such as macOS
/// `._scan.pdf` resource forks are left out. Directories that happen to match
/// are skipped.
pub fn discover_pdfs(pattern: &str) -> Result<Vec<PathBuf>> {
    let options = MatchOptions {
        require_literal_leading_dot: true,
        ..MatchOptions::new()
    };
    let mut files = Vec::new();

    for entry in glob::glob_with(pattern, options)? {
        let path = entry?;
        if path.is_dir() {
            log::debug!("Skipping directory {}", path.display());
            continue;
        }
        files.push(path);
    }

    log::debug!("Pattern '{pattern}' matched {} file(s)", files.len());
    Ok(files)
}

/// Convert every file matched by `pattern` into `<scratch>/<basename>.txt`.
///
/// This is a complete pass: all files are converted before the function
/// returns, and the first conversion error aborts it. The mapping is returned
/// in the order the files were discovered.
pub fn extract_all<C: TextConverter>(
    pattern: &str,
    converter: &C,
    scratch: &ScratchDir,
) -> Result<Vec<Extraction>> {
    let plan = plan_extractions(discover_pdfs(pattern)?, scratch)?;

    for extraction in &plan {
        log::debug!(
            "Converting {} with {}",
            extraction.source.display(),
            converter.name()
        );
        converter.convert(&extraction.source, &extraction.text)?;
    }

    Ok(plan)
}

/// Pair each source with its text path, rejecting basenames that collide.
fn plan_extractions(sources: Vec<PathBuf>, scratch: &ScratchDir) -> Result<Vec<Extraction>> {
    let mut seen: HashMap<PathBuf, usize> = HashMap::new();
    let mut plan: Vec<Extraction> = Vec::with_capacity(sources.len());

    for source in sources {
        let text = scratch.text_path_for(&source);
        if let Some(&index) = seen.get(&text) {
            return Err(collision(&plan[index].source, &source, &text));
        }
        seen.insert(text.clone(), plan.len());
        plan.push(Extraction { source, text });
    }

    Ok(plan)
}

fn collision(first: &Path, second: &Path, text: &Path) -> InjectError {
    InjectError::ScratchCollision {
        first: first.to_path_buf(),
        second: second.to_path_buf(),
        text: text.to_path_buf(),
    }
}
