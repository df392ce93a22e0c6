//! Property-based tests for the ledger store.

use proptest::prelude::*;

use super::store::LedgerStore;
use super::types::truncated_amount;

/// Amounts with a fractional part, both signs.
fn amount_strategy() -> impl Strategy<Value = f64> {
    -1_000_000.0f64..1_000_000.0f64
}

/// Comments with optional surrounding whitespace.
fn comment_strategy() -> impl Strategy<Value = String> {
    "[ \t]{0,3}\\PC{0,40}[ \t]{0,3}"
}

fn changes_strategy() -> impl Strategy<Value = Vec<(f64, String)>> {
    prop::collection::vec((amount_strategy(), comment_strategy()), 0..25)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// The total is the sum of truncated amounts, not of recorded ones.
    #[test]
    fn prop_total_is_sum_of_truncated_amounts(changes in changes_strategy()) {
        let dir = tempfile::tempdir().unwrap();
        let mut store = LedgerStore::open(dir.path()).unwrap();

        let mut expected = 0i64;
        for (i, (amount, comment)) in changes.iter().enumerate() {
            let applied = store.apply_change_at(*amount, comment, 1_700_000_000).unwrap();
            expected += truncated_amount(*amount).unwrap();

            prop_assert_eq!(applied.total, expected);
            // One record per change, never fewer.
            prop_assert_eq!(store.history().len(), i + 1);
            prop_assert_eq!(&applied.record.comment, comment.trim());
        }

        prop_assert_eq!(store.total(), expected);
    }

    /// Restarting from disk reproduces total and history exactly.
    #[test]
    fn prop_reload_round_trips(changes in changes_strategy()) {
        let dir = tempfile::tempdir().unwrap();
        let mut store = LedgerStore::open(dir.path()).unwrap();
        for (i, (amount, comment)) in changes.iter().enumerate() {
            store.apply_change_at(*amount, comment, i64::try_from(i).unwrap()).unwrap();
        }

        let reloaded = LedgerStore::open(dir.path()).unwrap();
        prop_assert_eq!(reloaded.snapshot(), store.snapshot());

        let again = LedgerStore::open(dir.path()).unwrap();
        prop_assert_eq!(again.snapshot(), reloaded.snapshot());
    }
}
