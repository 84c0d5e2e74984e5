//! Top-level error for a fetch run. Every variant is terminal.

use std::io;
use std::path::PathBuf;

use crate::fetcher::TransferError;
use crate::provider::ProviderError;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// A required option was empty or missing (flag name without dashes).
    #[error("the -{0} flag is required")]
    MissingFlag(&'static str),

    #[error("failed to create output directory {}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to open output file {}", path.display())]
    OpenOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error(transparent)]
    Transfer(#[from] TransferError),
}
