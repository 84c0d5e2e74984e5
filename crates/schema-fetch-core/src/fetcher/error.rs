//! Transfer-stage failures.

use std::io;

use crate::duration::HumanDuration;

use super::status::HttpStatus;

#[derive(Debug, thiserror::Error)]
pub enum TransferError {
    /// The assembled URL could not be parsed.
    #[error("failed to fetch schema: invalid URL {url:?}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("failed to fetch schema: unsupported protocol scheme {0:?}")]
    UnsupportedScheme(String),

    /// Connection, DNS, TLS or other failure before any body bytes arrived.
    #[error("failed to fetch schema")]
    Request(#[source] curl::Error),

    /// The whole-request timeout elapsed (connect, headers or body).
    #[error("failed to fetch schema: request timed out after {0}")]
    Timeout(HumanDuration),

    /// Final response status was not 200.
    #[error("bad status: {0}")]
    Status(HttpStatus),

    /// Reading the body failed after it started streaming.
    #[error("failed to write schema to file")]
    Read(#[source] curl::Error),

    /// Writing the body to the destination failed.
    #[error("failed to write schema to file")]
    Write(#[source] io::Error),
}

impl TransferError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, TransferError::Timeout(_))
    }
}
