//! Request middleware.

pub mod auth;

pub use auth::{AuthGate, require_capability};
