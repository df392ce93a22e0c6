//! Error responses.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::error;

use tallybox_core::ledger::LedgerError;
use tallybox_shared::AppError;

/// Error returned by handlers and middleware.
///
/// Renders as `{"error": <code>, "message": <text>}`.
#[derive(Debug)]
pub struct ApiError {
    source: AppError,
    code: &'static str,
    status: StatusCode,
}

impl ApiError {
    /// Generic 401.
    #[must_use]
    pub fn unauthorized(detail: impl Into<String>) -> Self {
        AppError::Unauthorized(detail.into()).into()
    }

    /// HTTP status for this error.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Machine-readable error code.
    #[must_use]
    pub fn code(&self) -> &'static str {
        self.code
    }
}

impl From<AppError> for ApiError {
    fn from(source: AppError) -> Self {
        let code = source.error_code();
        let status = StatusCode::from_u16(source.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        Self {
            source,
            code,
            status,
        }
    }
}

// Body rejections keep axum's status (400, 415 or 422) but use the JSON body.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        let source = AppError::Validation(rejection.body_text());
        Self {
            code: source.error_code(),
            status: rejection.status(),
            source,
        }
    }
}

impl From<LedgerError> for ApiError {
    fn from(err: LedgerError) -> Self {
        if err.is_validation() {
            Self {
                code: err.error_code(),
                source: AppError::Validation(err.to_string()),
                status: StatusCode::BAD_REQUEST,
            }
        } else {
            AppError::Internal(err.to_string()).into()
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self.source, "Request failed");
        }

        (
            status,
            Json(json!({
                "error": self.code,
                "message": self.source.public_message(),
            })),
        )
            .into_response()
    }
}
