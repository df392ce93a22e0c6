//! Ledger error types for validation, storage and corruption.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during ledger operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    // ========== Validation Errors ==========
    /// Change request carried no comment.
    #[error("Comment is required")]
    CommentMissing,

    /// Comment exceeds the allowed length.
    #[error("Comment too big: {len} characters, at most {max} allowed")]
    CommentTooLong {
        /// Length of the submitted comment, in characters.
        len: usize,
        /// Maximum allowed length.
        max: usize,
    },

    /// Amount is not finite or does not fit the running total.
    #[error("Amount {0} is out of range")]
    AmountOutOfRange(f64),

    // ========== Corruption Errors ==========
    /// `total.txt` exists but is not an integer.
    #[error("Corrupt total file {path}: {source}")]
    CorruptTotal {
        /// Offending file.
        path: PathBuf,
        /// Parse failure.
        #[source]
        source: std::num::ParseIntError,
    },

    /// `history.json` exists but is not a list of history records.
    #[error("Corrupt history file {path}: {source}")]
    CorruptHistory {
        /// Offending file.
        path: PathBuf,
        /// Parse failure.
        #[source]
        source: serde_json::Error,
    },

    // ========== Storage Errors ==========
    /// Reading or writing a data file failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// File or directory being accessed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// History could not be serialized.
    #[error("Failed to encode history: {0}")]
    Encode(#[from] serde_json::Error),
}

impl LedgerError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::CommentMissing => "comment_missing",
            Self::CommentTooLong { .. } => "comment_too_long",
            Self::AmountOutOfRange(_) => "amount_out_of_range",
            Self::CorruptTotal { .. } => "corrupt_total",
            Self::CorruptHistory { .. } => "corrupt_history",
            Self::Io { .. } => "storage_error",
            Self::Encode(_) => "encode_error",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub fn http_status_code(&self) -> u16 {
        match self {
            // 400 Bad Request - validation errors
            Self::CommentMissing | Self::CommentTooLong { .. } | Self::AmountOutOfRange(_) => 400,

            // 500 Internal Server Error
            Self::CorruptTotal { .. }
            | Self::CorruptHistory { .. }
            | Self::Io { .. }
            | Self::Encode(_) => 500,
        }
    }

    /// Returns true if the error was caused by the request rather than the store.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        self.http_status_code() == 400
    }
}
