//! HTTP API layer with Axum routes and middleware.
//!
//! This crate provides:
//! - Ledger routes (`/total`, `/history`, `/data`, `/change`)
//! - Capability-scoped bearer-token middleware
//! - JSON error responses

pub mod error;
pub mod middleware;
pub mod routes;

use std::sync::Arc;

use axum::{Router, http::header::AUTHORIZATION};
use tokio::sync::Mutex;
use tower_http::sensitive_headers::SetSensitiveRequestHeadersLayer;
use tower_http::trace::TraceLayer;

use tallybox_core::ledger::LedgerStore;
use tallybox_shared::ApiTokens;

pub use error::ApiError;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// The single ledger; the lock serializes read-modify-persist.
    pub ledger: Arc<Mutex<LedgerStore>>,
    /// Resolved bearer tokens.
    pub tokens: Arc<ApiTokens>,
}

impl AppState {
    /// Wraps a loaded store and the resolved tokens.
    #[must_use]
    pub fn new(store: LedgerStore, tokens: ApiTokens) -> Self {
        Self {
            ledger: Arc::new(Mutex::new(store)),
            tokens: Arc::new(tokens),
        }
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    routes::api_routes(&state)
        .layer(TraceLayer::new_for_http())
        .layer(SetSensitiveRequestHeadersLayer::new([AUTHORIZATION]))
        .with_state(state)
}
