use std::path::{Path, PathBuf};

use url::Url;

use crate::error::LaunchError;

/// Choose the project root for `file` among the open workspace folders.
///
/// The deepest folder containing the file wins; otherwise the first folder
/// is used. `None` when no folder is open.
#[must_use]
pub fn pick_project_root(roots: &[PathBuf], file: Option<&Path>) -> Option<PathBuf> {
    let containing = file.and_then(|file| {
        roots
            .iter()
            .filter(|root| file.starts_with(root))
            .max_by_key(|root| root.components().count())
    });
    containing.or_else(|| roots.first()).cloned()
}

/// Accept either a plain path or a `file://` URI.
///
/// # Errors
///
/// [`LaunchError::NotALocalFile`] for a URI that does not name a local file.
pub fn source_path(raw: &str) -> Result<PathBuf, LaunchError> {
    if !raw.starts_with("file:") {
        return Ok(PathBuf::from(raw));
    }
    let url = Url::parse(raw).map_err(|_| LaunchError::NotALocalFile(raw.to_string()))?;
    url.to_file_path()
        .map_err(|()| LaunchError::NotALocalFile(raw.to_string()))
}
