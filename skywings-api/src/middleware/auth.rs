use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::{IntoResponse, Response},
};
use skywings_core::CoreError;
use tracing::debug;

use crate::error::AppError;
use crate::state::AuthState;

pub fn bearer_token(req: &Request) -> Option<&str> {
    bearer_from_headers(req.headers())
}

/// `None` for a missing header, another scheme, or an empty token.
pub fn bearer_from_headers(headers: &HeaderMap) -> Option<&str> {
    headers
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

/// Validates the bearer token against the stored password and attaches the
/// resulting [`skywings_shared::dto::Principal`] to the request.
pub async fn require_principal(
    State(state): State<AuthState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = bearer_token(&req)
        .ok_or_else(|| AppError::AuthenticationError("Missing bearer token".to_string()).into_response())?
        .to_string();

    let principal = state.auth.authenticate(&token).await.map_err(|e| match e {
        CoreError::Unauthorized(reason) => {
            debug!("Rejected request: {}", reason);
            AppError::AuthenticationError("Invalid Token".to_string()).into_response()
        }
        other => AppError::from(other).into_response(),
    })?;

    req.extensions_mut().insert(principal);
    Ok(next.run(req).await)
}
