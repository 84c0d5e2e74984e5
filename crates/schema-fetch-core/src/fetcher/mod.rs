//! End-to-end fetch of one schema file.
//!
//! Stages run strictly in order: validate options, ensure the destination
//! directory, build the URL, open (create/truncate) the destination file, then
//! perform the GET. A file created before a failed transfer is left on disk.

mod error;
mod status;
mod transfer;

pub use error::TransferError;
pub use status::HttpStatus;
pub use transfer::{download_to, TransferOptions};

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

use crate::destination::resolve_destination;
use crate::error::FetchError;
use crate::provider::Provider;

/// Everything needed for one fetch.
#[derive(Debug, Clone)]
pub struct FetchRequest {
    /// Provider name; validated when the URL is built.
    pub provider: String,
    /// Source locator (path under the provider prefix, or a full URL for `none`).
    pub locator: String,
    /// Destination file or directory.
    pub output: PathBuf,
    pub transfer: TransferOptions,
}

/// Result of a successful fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOutcome {
    /// Effective URL (provider prefix applied).
    pub url: String,
    /// Resolved destination file.
    pub path: PathBuf,
    pub bytes: u64,
}

/// Fails if the locator or output path is empty; the locator is checked first.
pub fn require_options(locator: &str, output: &Path) -> Result<(), FetchError> {
    if locator.is_empty() {
        return Err(FetchError::MissingFlag("url"));
    }
    if output.as_os_str().is_empty() {
        return Err(FetchError::MissingFlag("output"));
    }
    Ok(())
}

impl FetchRequest {
    pub fn validate(&self) -> Result<(), FetchError> {
        require_options(&self.locator, &self.output)
    }
}

fn open_output(path: &Path) -> Result<File, FetchError> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o644);
    }
    options.open(path).map_err(|source| FetchError::OpenOutput {
        path: path.to_path_buf(),
        source,
    })
}

/// Runs a full fetch: destination resolution, URL construction and transfer.
pub fn fetch(req: &FetchRequest) -> Result<FetchOutcome, FetchError> {
    req.validate()?;

    let path = resolve_destination(&req.output, &req.locator)?;
    let provider: Provider = req.provider.parse()?;
    let url = provider.build_url(&req.locator);
    tracing::debug!(
        "fetch provider={} url={} dest={}",
        provider,
        url,
        path.display()
    );

    // Dropped on every return path below.
    let mut file = open_output(&path)?;
    let bytes = download_to(&url, &mut file, &req.transfer)?;

    tracing::info!("fetched {} bytes from {} to {}", bytes, url, path.display());
    Ok(FetchOutcome { url, path, bytes })
}
