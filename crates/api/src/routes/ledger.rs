//! Ledger routes: read views and the change endpoint.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{AppState, error::ApiError};
use tallybox_core::ledger::{HistoryRecord, validate_comment};

/// `GET /total`.
pub fn total_routes() -> Router<AppState> {
    Router::new().route("/total", get(get_total))
}

/// `GET /history`.
pub fn history_routes() -> Router<AppState> {
    Router::new().route("/history", get(get_history))
}

/// `GET /data` and `POST /change`.
pub fn full_access_routes() -> Router<AppState> {
    Router::new()
        .route("/data", get(get_data))
        .route("/change", post(post_change))
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for `POST /change`.
#[derive(Debug, Deserialize)]
pub struct ChangeRequest {
    /// Signed amount; fractional values are allowed.
    pub amount: f64,
    /// Free-text comment; absence is a validation error.
    pub comment: Option<String>,
}

/// Response for `GET /total`.
#[derive(Debug, Serialize)]
pub struct TotalResponse {
    /// Running total.
    pub total: i64,
}

/// Response for `GET /history`.
#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    /// Full history, oldest first.
    pub history: Vec<HistoryRecord>,
}

/// Response for `GET /data`.
#[derive(Debug, Serialize)]
pub struct DataResponse {
    /// Full history, oldest first.
    pub history: Vec<HistoryRecord>,
    /// Running total.
    pub total: i64,
}

/// Response for `POST /change`.
#[derive(Debug, Serialize)]
pub struct ChangeResponse {
    /// Always `true`; failures use the error body instead.
    pub success: bool,
    /// Running total after the change.
    pub total: i64,
    /// Record appended by the change.
    pub history_record: HistoryRecord,
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET `/total` - Current running total.
async fn get_total(State(state): State<AppState>) -> Json<TotalResponse> {
    let ledger = state.ledger.lock().await;
    Json(TotalResponse {
        total: ledger.total(),
    })
}

/// GET `/history` - Every recorded change.
async fn get_history(State(state): State<AppState>) -> Json<HistoryResponse> {
    let history = state.ledger.lock().await.history().to_vec();
    Json(HistoryResponse { history })
}

/// GET `/data` - Total and history from the same instant.
async fn get_data(State(state): State<AppState>) -> Json<DataResponse> {
    let snapshot = state.ledger.lock().await.snapshot();
    Json(DataResponse {
        history: snapshot.history,
        total: snapshot.total,
    })
}

/// POST `/change` - Apply a signed change and persist it.
///
/// The ledger lock is held until both files are written, so the response is
/// only sent once the change is on disk.
async fn post_change(
    State(state): State<AppState>,
    payload: Result<Json<ChangeRequest>, JsonRejection>,
) -> Result<Json<ChangeResponse>, ApiError> {
    let Json(payload) = payload?;
    let comment = validate_comment(payload.comment.as_deref())?;

    let mut ledger = state.ledger.lock().await;
    let applied = ledger.apply_change(payload.amount, comment)?;
    drop(ledger);

    info!(
        amount = applied.record.amount,
        total = applied.total,
        "Applied ledger change"
    );

    Ok(Json(ChangeResponse {
        success: true,
        total: applied.total,
        history_record: applied.record,
    }))
}
