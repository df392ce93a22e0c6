//! Core ledger logic for TallyBox.
//!
//! This crate holds the ledger model and its flat-file persistence with ZERO
//! web dependencies.
//!
//! # Modules
//!
//! - `ledger` - Running total, change history, validation and storage

pub mod ledger;
