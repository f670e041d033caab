//! PDF-to-text conversion backends.

use std::ffi::OsString;
use std::path::Path;
use std::process::Command;

use lopdf::Document;

use crate::{InjectError, Result};

/// Something that turns a PDF on disk into a plain-text file on disk.
pub trait TextConverter {
    /// Convert `pdf` and write its text to `txt`.
    ///
    /// Implementations must return an error rather than leave `txt` missing.
    fn convert(&self, pdf: &Path, txt: &Path) -> Result<()>;

    /// Short backend name for log messages.
    fn name(&self) -> &str;
}

impl<T: TextConverter + ?Sized> TextConverter for &T {
    fn convert(&self, pdf: &Path, txt: &Path) -> Result<()> {
        (**self).convert(pdf, txt)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<T: TextConverter + ?Sized> TextConverter for Box<T> {
    fn convert(&self, pdf: &Path, txt: &Path) -> Result<()> {
        (**self).convert(pdf, txt)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

// ── Pdftotext ─────────────────────────────────────────────────────────────────

/// Runs poppler's `pdftotext <input.pdf> <output.txt>` once per file.
///
/// The call blocks until the process exits; there is no timeout.
#[derive(Debug, Clone)]
pub struct Pdftotext {
    program: OsString,
    label: String,
}

impl Pdftotext {
    /// Use `program` instead of looking up `pdftotext` on `PATH`.
    pub fn with_program<S: Into<OsString>>(program: S) -> Self {
        let program = program.into();
        let label = program.to_string_lossy().into_owned();
        Self { program, label }
    }
}

impl Default for Pdftotext {
    fn default() -> Self {
        Self::with_program("pdftotext")
    }
}

impl TextConverter for Pdftotext {
    fn convert(&self, pdf: &Path, txt: &Path) -> Result<()> {
        let output = Command::new(&self.program)
            .arg(pdf)
            .arg(txt)
            .output()
            .map_err(|source| InjectError::ConverterSpawn {
                program: self.label.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(InjectError::from_exit(
                pdf.to_path_buf(),
                output.status,
                &output.stderr,
            ));
        }

        // pdftotext can exit 0 on some damaged inputs without writing anything
        if !txt.is_file() {
            return Err(InjectError::ConversionFailed {
                path: pdf.to_path_buf(),
                reason: format!("no text written to '{}'", txt.display()),
            });
        }

        Ok(())
    }

    fn name(&self) -> &str {
        &self.label
    }
}

// ── LopdfConverter ────────────────────────────────────────────────────────────

/// In-process text extraction through lopdf, for machines without poppler.
///
/// Pages are extracted in page-number order and concatenated.
#[derive(Debug, Clone, Copy, Default)]
pub struct LopdfConverter;

impl TextConverter for LopdfConverter {
    fn convert(&self, pdf: &Path, txt: &Path) -> Result<()> {
        let document = Document::load(pdf)?;
        let pages: Vec<u32> = document.get_pages().keys().copied().collect();

        if pages.is_empty() {
            return Err(InjectError::ConversionFailed {
                path: pdf.to_path_buf(),
                reason: "document has no pages".into(),
            });
        }

        let text = document.extract_text(&pages)?;
        std::fs::write(txt, text)?;
        Ok(())
    }

    fn name(&self) -> &str {
        "lopdf"
    }
}
