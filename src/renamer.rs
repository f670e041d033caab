use std::path::{Path, PathBuf};

use crate::{InjectError, Result};

/// Path to `filename` in the same directory as `path`.
///
/// ```
/// # use std::path::Path;
/// # use autoinjector::sibling_path;
/// assert_eq!(
///     sibling_path("injects/scan.pdf", "001 Intro.pdf"),
///     Path::new("injects/001 Intro.pdf"),
/// );
/// assert_eq!(sibling_path("scan.pdf", "001 Intro.pdf"), Path::new("001 Intro.pdf"));
/// ```
pub fn sibling_path<P: AsRef<Path>>(path: P, filename: &str) -> PathBuf {
    match path.as_ref().parent() {
        Some(parent) => parent.join(filename),
        None => PathBuf::from(filename),
    }
}

/// Rename `path` to `filename` inside its own directory and return the new
/// path.
///
/// An existing file at the destination is replaced. Renaming a file to the
/// name it already has does nothing.
pub fn rename_in_place<P: AsRef<Path>>(path: P, filename: &str) -> Result<PathBuf> {
    let from = path.as_ref();
    let to = sibling_path(from, filename);

    if from == to {
        log::debug!("{} already has its target name", from.display());
        return Ok(to);
    }

    if to.exists() {
        log::warn!("Overwriting existing file {}", to.display());
    }

    std::fs::rename(from, &to).map_err(|source| InjectError::RenameFailed {
        from: from.to_path_buf(),
        to: to.clone(),
        source,
    })?;

    Ok(to)
}
