//! customer-api under `/api/v1/customers`.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use axum_extra::headers::{authorization::Bearer, Authorization};
use axum_extra::TypedHeader;
use serde::Deserialize;
use skywings_shared::dto::{CustomerDetails, CustomerView, LoginRequest, TokenResponse};
use skywings_shared::models::Customer;
use skywings_shared::Masked;
use uuid::Uuid;

use crate::error::AppError;
use crate::state::CustomerState;

#[derive(Debug, Deserialize)]
pub struct LoginParams {
    pub email: String,
    pub password: Masked<String>,
}

pub fn routes() -> Router<CustomerState> {
    Router::new().nest(
        "/api/v1/customers",
        Router::new()
            .route("/register", post(register))
            .route("/register/details", post(register_details))
            .route("/getAll", get(list))
            .route("/getById/{id}", get(get_by_id))
            .route("/email/{email}", get(by_email))
            .route("/update/{id}", put(update))
            .route("/delete/{id}", delete(remove))
            .route("/login", post(login))
            .route("/validate", get(validate))
            .route("/logout", post(logout)),
    )
}

async fn register(
    State(state): State<CustomerState>,
    Json(customer): Json<Customer>,
) -> Result<(StatusCode, Json<CustomerView>), AppError> {
    let created = state.customers.register(customer).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn register_details(
    State(state): State<CustomerState>,
    Json(details): Json<CustomerDetails>,
) -> Result<(StatusCode, Json<CustomerView>), AppError> {
    let created = state.customers.register_details(details).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn list(State(state): State<CustomerState>) -> Result<Json<Vec<CustomerView>>, AppError> {
    Ok(Json(state.customers.list().await?))
}

async fn get_by_id(
    State(state): State<CustomerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CustomerView>, AppError> {
    Ok(Json(state.customers.get(id).await?))
}

async fn by_email(
    State(state): State<CustomerState>,
    Path(email): Path<String>,
) -> Result<Json<CustomerView>, AppError> {
    Ok(Json(state.customers.by_email(&email).await?))
}

async fn update(
    State(state): State<CustomerState>,
    Path(id): Path<Uuid>,
    Json(customer): Json<Customer>,
) -> Result<Json<CustomerView>, AppError> {
    Ok(Json(state.customers.update(id, customer).await?))
}

async fn remove(
    State(state): State<CustomerState>,
    Path(id): Path<Uuid>,
) -> Result<String, AppError> {
    Ok(state.customers.delete(id).await?)
}

/// POST /api/v1/customers/login?email=&password=
async fn login(
    State(state): State<CustomerState>,
    Query(params): Query<LoginParams>,
) -> Result<Json<TokenResponse>, AppError> {
    let request = LoginRequest {
        email: params.email,
        password: params.password,
    };
    Ok(Json(state.customers.login(&request).await?))
}

async fn validate(
    State(state): State<CustomerState>,
    TypedHeader(Authorization(bearer)): TypedHeader<Authorization<Bearer>>,
) -> Result<Json<bool>, AppError> {
    Ok(Json(state.customers.validate(bearer.token()).await?))
}

async fn logout(
    State(state): State<CustomerState>,
    TypedHeader(Authorization(bearer)): TypedHeader<Authorization<Bearer>>,
) -> Result<String, AppError> {
    Ok(state.customers.logout(bearer.token()).await?)
}
