//! Shared configuration, capability tokens, and errors for TallyBox.
//!
//! This crate provides common types used across all other crates:
//! - Configuration resolution with token fallbacks
//! - Capability-scoped bearer tokens
//! - Application-wide error types

pub mod auth;
pub mod config;
pub mod error;

pub use auth::{ApiTokens, Capability};
pub use config::{AppConfig, ConfigError, RawConfig, ServerConfig};
pub use error::AppError;
