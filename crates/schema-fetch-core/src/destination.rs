//! Destination path resolution.
//!
//! Creates the parent directory tree of the output path, then, if the output
//! path names an existing directory, appends the file name taken from the
//! source locator.

use std::fs;
use std::path::{self, Path, PathBuf};

use crate::error::FetchError;

/// Returns the text after the last `/` of `locator` (the whole locator if it
/// has none). A trailing `/` yields an empty name.
pub fn filename_from_locator(locator: &str) -> &str {
    locator.rsplit('/').next().unwrap_or(locator)
}

/// Directory that must exist before the output file is written.
///
/// An output path ending in a separator names the directory itself.
fn directory_to_create(output: &Path) -> Option<&Path> {
    let ends_with_separator = output
        .as_os_str()
        .as_encoded_bytes()
        .last()
        .is_some_and(|&b| path::is_separator(b as char));
    if ends_with_separator {
        return Some(output);
    }
    output.parent().filter(|p| !p.as_os_str().is_empty())
}

/// Creates `dir` and all missing ancestors (0755 on Unix).
pub fn ensure_dir(dir: &Path) -> Result<(), FetchError> {
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o755);
    }
    builder.create(dir).map_err(|source| FetchError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}

/// Resolves the final destination for `locator` given the `output` option.
pub fn resolve_destination(output: &Path, locator: &str) -> Result<PathBuf, FetchError> {
    if let Some(dir) = directory_to_create(output) {
        ensure_dir(dir)?;
        tracing::debug!("ensured output directory {}", dir.display());
    }

    let mut path = output.to_path_buf();
    if path.is_dir() {
        path.push(filename_from_locator(locator));
    }
    Ok(path)
}
