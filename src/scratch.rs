use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::Result;

/// Prefix of every scratch directory, so leftovers are easy to spot in `/tmp`.
pub(crate) const SCRATCH_PREFIX: &str = "auto-injector-";

// ── ScratchDir ────────────────────────────────────────────────────────────────

/// A private, uniquely named directory that holds the extracted text for one
/// run.
///
/// The directory is removed by [`ScratchDir::close`], or when the handle is
/// dropped. [`ScratchDir::keep`] leaves it on disk instead.
#[derive(Debug)]
pub struct ScratchDir {
    dir: TempDir,
}

impl ScratchDir {
    /// Create a scratch directory under the system temporary directory.
    pub fn create() -> Result<Self> {
        let dir = tempfile::Builder::new().prefix(SCRATCH_PREFIX).tempdir()?;
        log::debug!("Created scratch directory {}", dir.path().display());
        Ok(Self { dir })
    }

    /// Create a scratch directory inside `parent`.
    pub fn create_in<P: AsRef<Path>>(parent: P) -> Result<Self> {
        let dir = tempfile::Builder::new()
            .prefix(SCRATCH_PREFIX)
            .tempdir_in(parent)?;
        log::debug!("Created scratch directory {}", dir.path().display());
        Ok(Self { dir })
    }

    /// The directory's location.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Where the text extracted from `pdf` is written: `<basename>.txt`
    /// directly inside the scratch directory.
    ///
    /// ```
    /// # use autoinjector::ScratchDir;
    /// let scratch = ScratchDir::create().unwrap();
    /// let txt = scratch.text_path_for("injects/Inject 3.pdf");
    /// assert_eq!(txt, scratch.path().join("Inject 3.pdf.txt"));
    /// ```
    pub fn text_path_for<P: AsRef<Path>>(&self, pdf: P) -> PathBuf {
        let mut name = pdf
            .as_ref()
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".txt");
        self.dir.path().join(name)
    }

    /// Recursively delete the directory and everything in it.
    pub fn close(self) -> Result<()> {
        let path = self.dir.path().to_path_buf();
        self.dir.close()?;
        log::debug!("Removed scratch directory {}", path.display());
        Ok(())
    }

    /// Leave the directory on disk and return its location.
    pub fn keep(self) -> PathBuf {
        self.dir.keep()
    }
}
