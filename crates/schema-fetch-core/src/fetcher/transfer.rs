//! Single blocking HTTP GET streamed into a writer.
//!
//! Uses the curl crate (libcurl easy interface). The status line is captured by
//! the header callback so that body bytes of a non-200 response are never
//! handed to the sink.

use std::cell::{Cell, RefCell};
use std::io::{self, Write};
use std::time::Duration;

use curl::easy::Easy;

use crate::duration::HumanDuration;

use super::error::TransferError;
use super::status::{parse_status_line, HttpStatus};

/// Client settings for one transfer.
#[derive(Debug, Clone)]
pub struct TransferOptions {
    /// Whole-request timeout (connect + headers + body). Zero disables it.
    pub timeout: Duration,
    pub user_agent: String,
    pub max_redirects: u32,
}

/// Validates `url` and returns the form handed to libcurl.
fn request_url(url: &str) -> Result<url::Url, TransferError> {
    let parsed = url::Url::parse(url).map_err(|source| TransferError::InvalidUrl {
        url: url.to_string(),
        source,
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(TransferError::UnsupportedScheme(other.to_string())),
    }
}

/// Performs one GET against `url`, writing the body of a 200 response to `sink`.
/// Returns the number of bytes written.
pub fn download_to<W: Write>(
    url: &str,
    sink: &mut W,
    opts: &TransferOptions,
) -> Result<u64, TransferError> {
    let parsed = request_url(url)?;

    let mut easy = Easy::new();
    easy.url(parsed.as_str()).map_err(TransferError::Request)?;
    easy.get(true).map_err(TransferError::Request)?;
    easy.follow_location(true).map_err(TransferError::Request)?;
    easy.max_redirections(opts.max_redirects)
        .map_err(TransferError::Request)?;
    easy.useragent(&opts.user_agent)
        .map_err(TransferError::Request)?;
    easy.timeout(opts.timeout).map_err(TransferError::Request)?;

    let status: RefCell<Option<HttpStatus>> = RefCell::new(None);
    let rejected = Cell::new(false);
    let written = Cell::new(0u64);
    let write_error: RefCell<Option<io::Error>> = RefCell::new(None);

    let performed = {
        let mut transfer = easy.transfer();
        transfer
            .header_function(|line| {
                // Redirects and 1xx responses each start with a new status line; the last one wins.
                if let Some(s) = parse_status_line(line) {
                    tracing::debug!("response status {}", s);
                    *status.borrow_mut() = Some(s);
                }
                true
            })
            .map_err(TransferError::Request)?;
        transfer
            .write_function(|data| {
                if status.borrow().as_ref().is_some_and(HttpStatus::is_redirect) {
                    return Ok(data.len()); // body of a hop being followed
                }
                if !status.borrow().as_ref().is_some_and(HttpStatus::is_ok) {
                    rejected.set(true);
                    return Ok(0); // abort transfer
                }
                match sink.write_all(data) {
                    Ok(()) => {
                        written.set(written.get() + data.len() as u64);
                        Ok(data.len())
                    }
                    Err(e) => {
                        tracing::warn!("schema write failed: {}", e);
                        *write_error.borrow_mut() = Some(e);
                        Ok(0)
                    }
                }
            })
            .map_err(TransferError::Request)?;
        transfer.perform()
    };

    if let Err(e) = performed {
        if e.is_operation_timedout() {
            return Err(TransferError::Timeout(HumanDuration(opts.timeout)));
        }
        if e.is_write_error() {
            if let Some(io_err) = write_error.take() {
                return Err(TransferError::Write(io_err));
            }
        }
        if !rejected.get() {
            return Err(if written.get() > 0 {
                TransferError::Read(e)
            } else {
                TransferError::Request(e)
            });
        }
    }

    let status = match status.into_inner() {
        Some(s) => s,
        None => HttpStatus {
            code: easy.response_code().map_err(TransferError::Request)?,
            reason: String::new(),
        },
    };
    if !status.is_ok() {
        return Err(TransferError::Status(status));
    }

    sink.flush().map_err(TransferError::Write)?;
    Ok(written.get())
}
