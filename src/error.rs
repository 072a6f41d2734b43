//! Error types for the event-stream driver.
//!
//! Scanning itself never fails: unresolvable comments and clauses degrade
//! silently. Only misuse of the file lifecycle in an event stream, or an
//! undecodable stream, is reported.

use thiserror::Error;

/// Errors raised while replaying an event stream.
#[derive(Debug, Error)]
pub enum ScanError {
    /// An event arrived outside a `begin_file`/`end_file` bracket.
    #[error("{event} event outside of a file scan")]
    NoOpenFile { event: &'static str },

    /// `begin_file` while another file is still open.
    #[error("cannot begin '{requested}': '{open}' is still being scanned")]
    FileAlreadyOpen { open: String, requested: String },

    /// The stream ended before the open file was closed.
    #[error("event stream ended inside '{0}'")]
    UnterminatedFile(String),

    /// The event stream could not be decoded.
    #[error("JSON error: {0}")]
    Json(String),
}

impl ScanError {
    pub fn no_open_file(event: &'static str) -> Self {
        Self::NoOpenFile { event }
    }

    pub fn file_already_open(open: impl Into<String>, requested: impl Into<String>) -> Self {
        Self::FileAlreadyOpen {
            open: open.into(),
            requested: requested.into(),
        }
    }

    pub fn json(message: impl Into<String>) -> Self {
        Self::Json(message.into())
    }
}

#[cfg(feature = "serde")]
impl From<serde_json::Error> for ScanError {
    fn from(err: serde_json::Error) -> Self {
        Self::json(err.to_string())
    }
}

/// Result alias for driver operations.
pub type Result<T, E = ScanError> = std::result::Result<T, E>;
