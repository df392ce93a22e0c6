//! API route definitions.

use axum::{Router, middleware};

use crate::{
    AppState,
    middleware::{AuthGate, require_capability},
};
use tallybox_shared::Capability;

pub mod ledger;

/// Creates the API router, each route group behind its capability's token.
///
/// `/data` and `/change` share the read-write token; `/total` and `/history`
/// each have their own read-only token.
pub fn api_routes(state: &AppState) -> Router<AppState> {
    let gated = |routes: Router<AppState>, capability| {
        routes.route_layer(middleware::from_fn_with_state(
            AuthGate::new(state.tokens.clone(), capability),
            require_capability,
        ))
    };

    Router::new()
        .merge(gated(ledger::total_routes(), Capability::ReadTotal))
        .merge(gated(ledger::history_routes(), Capability::ReadHistory))
        .merge(gated(ledger::full_access_routes(), Capability::ReadWrite))
}
