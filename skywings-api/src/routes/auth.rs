//! auth-api under `/api/v1/auth`.

use axum::{
    extract::{Path, State},
    http::HeaderMap,
    middleware,
    routing::{get, post},
    Extension, Json, Router,
};
use skywings_connector::auth_api::{INVALID_TOKEN, VALID_TOKEN};
use skywings_shared::dto::{CustomerView, LoginRequest, Principal, TokenResponse, UserDetailsDto};
use skywings_shared::models::Customer;
use tracing::info;

use crate::error::AppError;
use crate::middleware::{bearer_from_headers, require_principal};
use crate::state::AuthState;

pub fn routes(state: AuthState) -> Router<AuthState> {
    let protected = Router::new()
        .route("/me", get(me))
        .route("/access/{operation}", get(access))
        .route_layer(middleware::from_fn_with_state(state, require_principal));

    let public = Router::new()
        .route("/token", post(token))
        .route("/validate", get(validate))
        .route("/login", post(login))
        .route("/register", post(register))
        .route("/logout", post(logout));

    Router::new().nest("/api/v1/auth", public.merge(protected))
}

/// POST /api/v1/auth/token
/// Signs the supplied credentials as-is.
async fn token(
    State(state): State<AuthState>,
    Json(details): Json<UserDetailsDto>,
) -> Result<String, AppError> {
    Ok(state.auth.issue_token(&details)?)
}

/// GET /api/v1/auth/validate
/// Anything other than a well-formed bearer token is just invalid.
async fn validate(State(state): State<AuthState>, headers: HeaderMap) -> &'static str {
    let Some(token) = bearer_from_headers(&headers) else {
        return INVALID_TOKEN;
    };
    if state.auth.validate_token(token).await {
        VALID_TOKEN
    } else {
        INVALID_TOKEN
    }
}

async fn login(
    State(state): State<AuthState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    let response = state.auth.login(&req).await?;
    info!("Issued login token for {}", req.email);
    Ok(Json(response))
}

async fn register(
    State(state): State<AuthState>,
    Json(customer): Json<Customer>,
) -> Result<Json<TokenResponse>, AppError> {
    Ok(Json(state.auth.register(&customer).await?))
}

/// Tokens cannot be revoked; they stay valid until they expire.
async fn logout(headers: HeaderMap) -> Result<String, AppError> {
    if bearer_from_headers(&headers).is_none() {
        return Err(AppError::AuthenticationError("Missing bearer token".to_string()));
    }
    Ok("Logged out successfully".to_string())
}

async fn me(Extension(principal): Extension<Principal>) -> Json<Principal> {
    Json(principal)
}

/// GET /api/v1/auth/access/{operation}
/// ADMIN only.
async fn access(
    State(state): State<AuthState>,
    Extension(principal): Extension<Principal>,
    Path(operation): Path<String>,
) -> Result<Json<CustomerView>, AppError> {
    let customer = state.auth.admin_access(&principal, &operation).await?;
    Ok(Json(customer.into()))
}
