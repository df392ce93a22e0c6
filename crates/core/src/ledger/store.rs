//! Flat-file ledger store.
//!
//! The store owns the running total and the history and mirrors both to two
//! files in the data directory. Every mutation rewrites both files before it
//! returns; there is no append log and no atomic rename, so a crash during a
//! write can leave one file stale.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::error::LedgerError;
use super::types::{
    AppliedChange, HistoryRecord, LedgerSnapshot, rounded_amount, truncated_amount,
    unix_timestamp_now,
};
use super::version::write_version_marker;

/// File holding the running total as a decimal integer.
pub const TOTAL_FILE: &str = "total.txt";
/// File holding the history as a JSON array.
pub const HISTORY_FILE: &str = "history.json";
/// File holding the version marker.
pub const VERSION_FILE: &str = "version.txt";

/// Locations of the ledger files inside a data directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerPaths {
    /// Data directory.
    pub dir: PathBuf,
    /// `total.txt`.
    pub total: PathBuf,
    /// `history.json`.
    pub history: PathBuf,
    /// `version.txt`.
    pub version: PathBuf,
}

impl LedgerPaths {
    /// Derives the file paths for a data directory.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        Self {
            total: dir.join(TOTAL_FILE),
            history: dir.join(HISTORY_FILE),
            version: dir.join(VERSION_FILE),
            dir,
        }
    }

    /// Creates the data directory if it does not exist yet.
    pub fn ensure_dir(&self) -> Result<(), LedgerError> {
        fs::create_dir_all(&self.dir).map_err(|e| LedgerError::io(&self.dir, e))
    }
}

/// Reads a file, treating a missing file as `None`.
fn read_optional(path: &Path) -> Result<Option<String>, LedgerError> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(Some(contents)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(LedgerError::io(path, e)),
    }
}

/// Durable source of truth for the total and the history.
#[derive(Debug)]
pub struct LedgerStore {
    paths: LedgerPaths,
    total: i64,
    history: Vec<HistoryRecord>,
}

impl LedgerStore {
    /// Creates the data directory if needed and loads the ledger from it.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, LedgerError> {
        let paths = LedgerPaths::new(dir);
        paths.ensure_dir()?;
        Self::load(paths)
    }

    /// Startup sequence: create the data directory, refresh `version.txt`,
    /// then load the ledger.
    pub fn initialize(dir: impl Into<PathBuf>) -> Result<Self, LedgerError> {
        let paths = LedgerPaths::new(dir);
        paths.ensure_dir()?;
        write_version_marker(&paths)?;
        Self::load(paths)
    }

    /// Loads the ledger from its files.
    ///
    /// A missing total defaults to 0 and a missing history to an empty list.
    /// If either file was missing the resulting state is written back at once,
    /// so both files exist after a successful load.
    ///
    /// # Errors
    ///
    /// Fails if a file exists but cannot be read or parsed.
    pub fn load(paths: LedgerPaths) -> Result<Self, LedgerError> {
        let total_contents = read_optional(&paths.total)?;
        let history_contents = read_optional(&paths.history)?;
        let healed = total_contents.is_none() || history_contents.is_none();

        let total = match total_contents {
            Some(contents) => contents
                .trim()
                .parse::<i64>()
                .map_err(|source| LedgerError::CorruptTotal {
                    path: paths.total.clone(),
                    source,
                })?,
            None => 0,
        };

        let history = match history_contents {
            Some(contents) => serde_json::from_str::<Vec<HistoryRecord>>(&contents).map_err(
                |source| LedgerError::CorruptHistory {
                    path: paths.history.clone(),
                    source,
                },
            )?,
            None => Vec::new(),
        };

        let store = Self {
            paths,
            total,
            history,
        };
        if healed {
            store.save()?;
        }
        Ok(store)
    }

    /// Overwrites both data files with the in-memory state.
    pub fn save(&self) -> Result<(), LedgerError> {
        fs::write(&self.paths.total, self.total.to_string())
            .map_err(|e| LedgerError::io(&self.paths.total, e))?;

        let history = serde_json::to_string(&self.history)?;
        fs::write(&self.paths.history, history)
            .map_err(|e| LedgerError::io(&self.paths.history, e))?;

        Ok(())
    }

    /// Applies a change stamped with the current time.
    ///
    /// See [`LedgerStore::apply_change_at`].
    pub fn apply_change(&mut self, amount: f64, comment: &str) -> Result<AppliedChange, LedgerError> {
        self.apply_change_at(amount, comment, unix_timestamp_now())
    }

    /// Applies a change and persists the ledger.
    ///
    /// The total grows by the amount truncated toward zero while the record
    /// stores the amount rounded half to even. The comment must already have
    /// passed [`validate_comment`](super::validate_comment); it is trimmed here.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::AmountOutOfRange`] without touching state if the
    /// amount cannot be applied. If persisting fails the in-memory ledger
    /// already holds the change and the I/O error is returned.
    pub fn apply_change_at(
        &mut self,
        amount: f64,
        comment: &str,
        timestamp: i64,
    ) -> Result<AppliedChange, LedgerError> {
        let out_of_range = || LedgerError::AmountOutOfRange(amount);
        let truncated = truncated_amount(amount).ok_or_else(out_of_range)?;
        let rounded = rounded_amount(amount).ok_or_else(out_of_range)?;
        let total = self.total.checked_add(truncated).ok_or_else(out_of_range)?;

        let record = HistoryRecord {
            comment: comment.trim().to_string(),
            amount: rounded,
            timestamp,
        };

        self.total = total;
        self.history.push(record.clone());
        self.save()?;

        Ok(AppliedChange { total, record })
    }

    /// Running total.
    #[must_use]
    pub fn total(&self) -> i64 {
        self.total
    }

    /// History, oldest first.
    #[must_use]
    pub fn history(&self) -> &[HistoryRecord] {
        &self.history
    }

    /// Clones the current total and history.
    #[must_use]
    pub fn snapshot(&self) -> LedgerSnapshot {
        LedgerSnapshot {
            total: self.total,
            history: self.history.clone(),
        }
    }
}
