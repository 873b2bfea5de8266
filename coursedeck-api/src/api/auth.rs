//! Admin authentication middleware
//!
//! Admin catalog CRUD is guarded by a static bearer token. An empty
//! configured token disables checking entirely, which keeps local
//! development and tests friction-free.

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::warn;

use crate::AppState;

/// Admin authentication middleware
///
/// Validates `Authorization: Bearer <token>` against the configured admin
/// token. Returns 401 Unauthorized on mismatch.
///
/// **Note:** Applied to admin routes only; the browse surfaces are public.
pub async fn admin_auth_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    // Empty token disables ALL admin auth checking
    if state.admin_token.is_empty() {
        return Ok(next.run(request).await);
    }

    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(AuthError::MissingToken)?;

    let token = header
        .strip_prefix("Bearer ")
        .ok_or(AuthError::MalformedHeader)?;

    if token != state.admin_token {
        warn!("Admin token mismatch");
        return Err(AuthError::InvalidToken);
    }

    Ok(next.run(request).await)
}

/// Authentication error types for HTTP responses
#[derive(Debug)]
pub enum AuthError {
    MissingToken,
    MalformedHeader,
    InvalidToken,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AuthError::MissingToken => {
                (StatusCode::UNAUTHORIZED, "Missing authorization header".to_string())
            }
            AuthError::MalformedHeader => {
                (StatusCode::UNAUTHORIZED, "Expected bearer token".to_string())
            }
            AuthError::InvalidToken => (StatusCode::UNAUTHORIZED, "Invalid token".to_string()),
        };

        let body = Json(json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}
