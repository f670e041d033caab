use std::path::PathBuf;

use crate::extractor::{self, Extraction};
use crate::fields::{InjectFields, RequiredFields};
use crate::{renamer, sibling_path, RenamerConfig, Result, ScratchDir, TextConverter};

/// What happened to one PDF.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameOutcome {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub fields: RequiredFields,
    /// `false` for dry runs and for files that already had their target name.
    pub renamed: bool,
}

// ── InjectRenamer ─────────────────────────────────────────────────────────────

/// Runs a whole batch: convert every matched PDF, then rename every PDF.
///
/// Nothing is retried or skipped. The first error stops the batch, so files
/// renamed before it stay renamed and the rest are untouched.
pub struct InjectRenamer<C> {
    converter: C,
    config: RenamerConfig,
}

impl<C: TextConverter> InjectRenamer<C> {
    pub fn new(converter: C, config: RenamerConfig) -> Self {
        Self { converter, config }
    }

    /// Process every file matched by `pattern`.
    ///
    /// A pattern that matches nothing is not an error; the result is empty.
    pub fn run(&self, pattern: &str) -> Result<Vec<RenameOutcome>> {
        let scratch = match &self.config.scratch_parent {
            Some(parent) => ScratchDir::create_in(parent)?,
            None => ScratchDir::create()?,
        };

        let result = self.run_in(pattern, &scratch);

        // kept whether or not the run succeeded; otherwise an error leaves the
        // directory to the handle's drop
        if self.config.keep_scratch {
            let kept = scratch.keep();
            log::info!("Extracted text kept in {}", kept.display());
        } else if result.is_ok() {
            scratch.close()?;
        }

        result
    }

    /// Process every file matched by `pattern`, using a scratch directory the
    /// caller owns and cleans up.
    pub fn run_in(&self, pattern: &str, scratch: &ScratchDir) -> Result<Vec<RenameOutcome>> {
        let extractions = extractor::extract_all(pattern, &self.converter, scratch)?;
        if extractions.is_empty() {
            log::info!("No files matched '{pattern}'");
        }
        self.rename_all(&extractions)
    }

    /// Second pass: parse each text file and rename its PDF.
    fn rename_all(&self, extractions: &[Extraction]) -> Result<Vec<RenameOutcome>> {
        extractions
            .iter()
            .map(|extraction| self.rename_one(extraction))
            .collect()
    }

    fn rename_one(&self, extraction: &Extraction) -> Result<RenameOutcome> {
        let fields = InjectFields::from_file(&extraction.text)?;
        log::debug!("{}: {fields:?}", extraction.source.display());

        let required = fields.require(&extraction.source)?;
        let filename = required.filename();

        let (destination, renamed) = if self.config.dry_run {
            (sibling_path(&extraction.source, &filename), false)
        } else {
            let destination = renamer::rename_in_place(&extraction.source, &filename)?;
            let renamed = destination != extraction.source;
            (destination, renamed)
        };

        if renamed {
            log::info!(
                "Renamed {} -> {}",
                extraction.source.display(),
                destination.display()
            );
        }

        Ok(RenameOutcome {
            source: extraction.source.clone(),
            destination,
            fields: required,
            renamed,
        })
    }
}
