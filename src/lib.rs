//! # autoinjector
//!
//! Renames CCDC inject PDFs after the metadata printed inside them.
//!
//! ## What this crate does
//!
//! 1. **Extract text**: every PDF matched by a glob pattern is converted to
//!    plain text inside a private scratch directory (`pdftotext` by default,
//!    or the in-process lopdf backend).
//! 2. **Parse fields**: the `Inject Number:` and `Subject:` lines are pulled
//!    out of the text, along with the optional competition, duration, sender
//!    and recipient lines.
//! 3. **Build a filename**: `"{number:03} {subject}.pdf"`, with characters
//!    that are illegal in path segments removed.
//! 4. **Rename**: the original file is replaced, in its own directory, by the
//!    new name.
//!
//! ## Quick example
//!
//! ```no_run
//! use autoinjector::{InjectRenamer, Pdftotext, RenamerConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let renamer = InjectRenamer::new(Pdftotext::default(), RenamerConfig::default());
//!
//! for outcome in renamer.run("injects/*.pdf")? {
//!     println!("{} -> {}", outcome.source.display(), outcome.destination.display());
//! }
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

mod converter;
mod extractor;
mod fields;
mod naming;
mod pipeline;
mod renamer;
mod scratch;

pub use converter::{LopdfConverter, Pdftotext, TextConverter};
pub use extractor::{discover_pdfs, extract_all, Extraction};
pub use fields::{Duration, InjectFields, RequiredFields};
pub use naming::{sanitize_filename, target_filename};
pub use pipeline::{InjectRenamer, RenameOutcome};
pub use renamer::{rename_in_place, sibling_path};
pub use scratch::ScratchDir;

// ── Configuration ────────────────────────────────────────────────────────────

/// Runtime configuration for [`InjectRenamer`].
#[derive(Debug, Clone, Default)]
pub struct RenamerConfig {
    /// When `true`, every file is converted and parsed but nothing is renamed.
    /// The returned outcomes still carry the destination each file would get.
    pub dry_run: bool,

    /// When `true`, the scratch directory holding the extracted text is left
    /// on disk after the run instead of being deleted.
    pub keep_scratch: bool,

    /// Directory in which the scratch directory is created. Defaults to the
    /// system temporary directory.
    pub scratch_parent: Option<PathBuf>,
}

// ── Error type ───────────────────────────────────────────────────────────────

/// Every error that this crate can produce.
#[derive(Error, Debug)]
pub enum InjectError {
    /// The glob pattern given on the command line is malformed.
    #[error("invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    /// A path matched by the glob pattern could not be read.
    #[error("unreadable glob match: {0}")]
    Glob(#[from] glob::GlobError),

    /// The external converter program could not be started at all.
    #[error("failed to run '{program}': {source}")]
    ConverterSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The converter ran but did not produce a usable text file.
    #[error("conversion of '{}' failed: {reason}", path.display())]
    ConversionFailed { path: PathBuf, reason: String },

    /// Two matched PDFs share a basename and would overwrite each other's
    /// text file in the scratch directory.
    #[error(
        "'{}' and '{}' both extract to '{}'",
        first.display(),
        second.display(),
        text.display()
    )]
    ScratchCollision {
        first: PathBuf,
        second: PathBuf,
        text: PathBuf,
    },

    /// One or more required labels were not found in the extracted text.
    #[error("'{}' is missing required field(s): {}", path.display(), fields.join(", "))]
    MissingFields {
        path: PathBuf,
        fields: Vec<&'static str>,
    },

    /// The inject number is all digits but too large to be an inject number.
    #[error("'{}' has an out-of-range inject number '{value}'", path.display())]
    InvalidNumber { path: PathBuf, value: String },

    /// The filesystem refused to move the PDF to its new name.
    #[error("failed to rename '{}' to '{}': {source}", from.display(), to.display())]
    RenameFailed {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The built-in lopdf backend could not read the document.
    #[error("PDF parse error: {0}")]
    Pdf(#[from] lopdf::Error),

    /// Any other filesystem I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl InjectError {
    /// Builds a [`InjectError::ConversionFailed`] from a converter's exit
    /// status and whatever it wrote to stderr.
    pub(crate) fn from_exit(path: PathBuf, status: ExitStatus, stderr: &[u8]) -> Self {
        let stderr = String::from_utf8_lossy(stderr);
        let stderr = stderr.trim();
        let reason = if stderr.is_empty() {
            format!("converter exited with {status}")
        } else {
            format!("converter exited with {status}: {stderr}")
        };
        Self::ConversionFailed { path, reason }
    }
}

/// Convenience alias used throughout this crate.
pub type Result<T> = std::result::Result<T, InjectError>;
