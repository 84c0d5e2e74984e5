//! HTTP status line parsing for the header callback.

use std::fmt;
use std::str;

/// Status of the final HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpStatus {
    pub code: u32,
    /// Reason phrase as sent by the server (empty for HTTP/2).
    pub reason: String,
}

impl HttpStatus {
    pub fn is_ok(&self) -> bool {
        self.code == 200
    }

    pub fn is_redirect(&self) -> bool {
        (300..400).contains(&self.code)
    }
}

impl fmt::Display for HttpStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.reason.is_empty() {
            write!(f, "{}", self.code)
        } else {
            write!(f, "{} {}", self.code, self.reason)
        }
    }
}

/// Parses a raw header line; returns `Some` only for status lines
/// (`HTTP/1.1 404 Not Found`, `HTTP/2 200`).
pub(crate) fn parse_status_line(line: &[u8]) -> Option<HttpStatus> {
    let line = str::from_utf8(line).ok()?.trim_end();
    let rest = line.strip_prefix("HTTP/")?;
    let (_version, rest) = rest.split_once(' ')?;
    let rest = rest.trim_start();
    let (code, reason) = rest.split_once(' ').unwrap_or((rest, ""));
    if code.len() != 3 {
        return None;
    }
    let code = code.parse::<u32>().ok()?;
    Some(HttpStatus {
        code,
        reason: reason.trim().to_string(),
    })
}
