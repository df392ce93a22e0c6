//! Bearer-token middleware for capability-gated routes.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{HeaderMap, header::AUTHORIZATION},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::error::ApiError;
use tallybox_shared::{ApiTokens, Capability};

/// Extracts the bearer token from the Authorization header.
///
/// The scheme is matched case-insensitively; the token is taken verbatim.
fn extract_bearer_token(header: &str) -> Option<&str> {
    let (scheme, token) = header.split_once(' ')?;
    scheme.eq_ignore_ascii_case("bearer").then_some(token)
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(extract_bearer_token)
}

/// Middleware state: the resolved tokens and the capability a route needs.
#[derive(Clone)]
pub struct AuthGate {
    tokens: Arc<ApiTokens>,
    capability: Capability,
}

impl AuthGate {
    /// Creates a gate for one capability.
    #[must_use]
    pub fn new(tokens: Arc<ApiTokens>, capability: Capability) -> Self {
        Self { tokens, capability }
    }
}

/// Rejects the request with 401 unless it carries the gate's token.
///
/// Runs before any extractor of the wrapped handler, so an unauthorized
/// request never has its body parsed and never reaches the ledger.
pub async fn require_capability(
    State(gate): State<AuthGate>,
    request: Request,
    next: Next,
) -> Response {
    let outcome = match bearer_token(request.headers()) {
        None => Err("missing bearer token"),
        Some(token) if gate.tokens.verify(gate.capability, token) => Ok(()),
        Some(_) => Err("bearer token mismatch"),
    };

    match outcome {
        Ok(()) => next.run(request).await,
        Err(reason) => {
            debug!(capability = %gate.capability, reason, "Rejected request");
            ApiError::unauthorized(reason).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_extract_bearer_token() {
        assert_eq!(extract_bearer_token("Bearer abc"), Some("abc"));
        assert_eq!(extract_bearer_token("bearer abc"), Some("abc"));
        assert_eq!(extract_bearer_token("BEARER abc"), Some("abc"));
        assert_eq!(extract_bearer_token("BeArEr abc"), Some("abc"));
        assert_eq!(extract_bearer_token("Bearer"), None);
        assert_eq!(extract_bearer_token("Bearers abc"), None);
        assert_eq!(extract_bearer_token("Basic abc"), None);
        assert_eq!(extract_bearer_token("Bearerabc"), None);
    }

    #[test]
    fn test_bearer_token_from_headers() {
        let mut headers = HeaderMap::new();
        assert_eq!(bearer_token(&headers), None);

        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer s3cret"));
        assert_eq!(bearer_token(&headers), Some("s3cret"));
    }

    #[test]
    fn test_token_is_not_trimmed() {
        // Equality is exact; extra whitespace belongs to the token.
        assert_eq!(extract_bearer_token("Bearer  abc"), Some(" abc"));
    }
}
