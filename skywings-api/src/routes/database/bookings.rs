use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use skywings_core::records;
use skywings_shared::dto::{BookingRequest, BookingUpdate};
use skywings_shared::models::{Booking, Payment};
use uuid::Uuid;

use crate::error::AppError;
use crate::state::DatabaseState;

pub fn routes() -> Router<DatabaseState> {
    Router::new()
        .route("/booking", get(list_bookings))
        .route(
            "/booking/{id}",
            get(get_booking).put(update_booking).delete(delete_booking),
        )
        .route("/booking/create", post(create_booking))
        .route("/payment", get(list_payments))
        .route(
            "/payment/{id}",
            get(get_payment).put(update_payment).delete(delete_payment),
        )
        .route("/payment/create/{booking_id}", post(create_payment))
}

async fn list_bookings(State(state): State<DatabaseState>) -> Result<Json<Vec<Booking>>, AppError> {
    Ok(Json(state.records.repos().bookings.list().await?))
}

async fn get_booking(
    State(state): State<DatabaseState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Booking>, AppError> {
    Ok(Json(records::find(&*state.records.repos().bookings, id).await?))
}

/// POST /api/v1/db/booking/create
/// Customer, flight and seat are required; an inline payment is stored and linked.
async fn create_booking(
    State(state): State<DatabaseState>,
    Json(req): Json<BookingRequest>,
) -> Result<(StatusCode, Json<Booking>), AppError> {
    let booking = state.records.create_booking(req).await?;
    Ok((StatusCode::CREATED, Json(booking)))
}

async fn update_booking(
    State(state): State<DatabaseState>,
    Path(id): Path<Uuid>,
    Json(req): Json<BookingUpdate>,
) -> Result<Json<Booking>, AppError> {
    Ok(Json(state.records.update_booking(id, req).await?))
}

async fn delete_booking(
    State(state): State<DatabaseState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    records::remove(&*state.records.repos().bookings, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn list_payments(State(state): State<DatabaseState>) -> Result<Json<Vec<Payment>>, AppError> {
    Ok(Json(state.records.repos().payments.list().await?))
}

async fn get_payment(
    State(state): State<DatabaseState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Payment>, AppError> {
    Ok(Json(records::find(&*state.records.repos().payments, id).await?))
}

async fn create_payment(
    State(state): State<DatabaseState>,
    Path(booking_id): Path<Uuid>,
    Json(body): Json<Payment>,
) -> Result<(StatusCode, Json<Payment>), AppError> {
    let payment = state.records.create_payment(booking_id, body).await?;
    Ok((StatusCode::CREATED, Json(payment)))
}

async fn update_payment(
    State(state): State<DatabaseState>,
    Path(id): Path<Uuid>,
    Json(body): Json<Payment>,
) -> Result<Json<Payment>, AppError> {
    Ok(Json(state.records.update_payment(id, body).await?))
}

async fn delete_payment(
    State(state): State<DatabaseState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    records::remove(&*state.records.repos().payments, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
