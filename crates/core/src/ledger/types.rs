//! Ledger domain types and amount conversions.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// One logged change event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// Comment, trimmed of surrounding whitespace.
    pub comment: String,
    /// Requested amount rounded to the nearest integer, ties to even.
    pub amount: i64,
    /// Unix seconds at which the record was created.
    pub timestamp: i64,
}

/// Outcome of applying a change: the new total and the record appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedChange {
    /// Running total after the change.
    pub total: i64,
    /// Record appended to the history.
    pub record: HistoryRecord,
}

/// Copy of the whole ledger at one point in time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LedgerSnapshot {
    /// Running total.
    pub total: i64,
    /// Full history, oldest first.
    pub history: Vec<HistoryRecord>,
}

// 2^63; every f64 in [-2^63, 2^63) converts to i64 without saturating.
const I64_UPPER: f64 = 9_223_372_036_854_775_808.0;
const I64_LOWER: f64 = -9_223_372_036_854_775_808.0;

#[allow(clippy::cast_possible_truncation)]
fn integral_to_i64(value: f64) -> Option<i64> {
    (value.is_finite() && (I64_LOWER..I64_UPPER).contains(&value)).then(|| value as i64)
}

/// Amount applied to the running total: truncated toward zero.
#[must_use]
pub fn truncated_amount(amount: f64) -> Option<i64> {
    integral_to_i64(amount.trunc())
}

/// Amount stored in the history record: rounded half to even.
#[must_use]
pub fn rounded_amount(amount: f64) -> Option<i64> {
    integral_to_i64(amount.round_ties_even())
}

/// Current Unix time in seconds, rounded to the nearest second.
#[must_use]
pub fn unix_timestamp_now() -> i64 {
    (Utc::now().timestamp_millis() + 500).div_euclid(1000)
}
