//! Flat-file ledger: a running total plus an append-only change history.
//!
//! - Domain types and amount conversions
//! - Comment validation
//! - The file-backed store
//! - Version marker
//! - Error types for ledger operations

pub mod error;
pub mod store;
pub mod types;
pub mod validation;
pub mod version;

#[cfg(test)]
mod store_props;

pub use error::LedgerError;
pub use store::{HISTORY_FILE, LedgerPaths, LedgerStore, TOTAL_FILE, VERSION_FILE};
pub use types::{AppliedChange, HistoryRecord, LedgerSnapshot};
pub use validation::{MAX_COMMENT_CHARS, validate_comment};
pub use version::{BUILD, PRODUCT, VERSION, version_marker, write_version_marker};
