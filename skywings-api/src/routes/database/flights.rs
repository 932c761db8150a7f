use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use skywings_core::records;
use skywings_shared::models::{Fare, Flight, Seat};
use uuid::Uuid;

use crate::error::AppError;
use crate::state::DatabaseState;

pub fn routes() -> Router<DatabaseState> {
    Router::new()
        .route("/flight", get(list_flights))
        .route(
            "/flight/{id}",
            get(get_flight).put(update_flight).delete(delete_flight),
        )
        .route(
            "/flight/create/{origin_id}/{destination_id}/{airline_id}/{aircraft_id}",
            post(create_flight),
        )
        .route("/fare", get(list_fares))
        .route("/fare/{id}", get(get_fare).put(update_fare).delete(delete_fare))
        .route("/fare/create", post(create_fare))
        .route("/seat", get(list_seats))
        .route("/seat/{id}", get(get_seat).put(update_seat).delete(delete_seat))
        .route("/seat/create/{flight_id}/{fare_id}", post(create_seat))
}

// Flight

async fn list_flights(State(state): State<DatabaseState>) -> Result<Json<Vec<Flight>>, AppError> {
    Ok(Json(state.records.repos().flights.list().await?))
}

async fn get_flight(
    State(state): State<DatabaseState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Flight>, AppError> {
    Ok(Json(records::find(&*state.records.repos().flights, id).await?))
}

async fn create_flight(
    State(state): State<DatabaseState>,
    Path((origin_id, destination_id, airline_id, aircraft_id)): Path<(Uuid, Uuid, Uuid, Uuid)>,
    Json(body): Json<Flight>,
) -> Result<(StatusCode, Json<Flight>), AppError> {
    let flight = state
        .records
        .create_flight(origin_id, destination_id, airline_id, aircraft_id, body)
        .await?;
    Ok((StatusCode::CREATED, Json(flight)))
}

async fn update_flight(
    State(state): State<DatabaseState>,
    Path(id): Path<Uuid>,
    Json(body): Json<Flight>,
) -> Result<Json<Flight>, AppError> {
    Ok(Json(state.records.update_flight(id, body).await?))
}

async fn delete_flight(
    State(state): State<DatabaseState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    records::remove(&*state.records.repos().flights, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// Fare

async fn list_fares(State(state): State<DatabaseState>) -> Result<Json<Vec<Fare>>, AppError> {
    Ok(Json(state.records.repos().fares.list().await?))
}

async fn get_fare(
    State(state): State<DatabaseState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Fare>, AppError> {
    Ok(Json(records::find(&*state.records.repos().fares, id).await?))
}

async fn create_fare(
    State(state): State<DatabaseState>,
    Json(body): Json<Fare>,
) -> Result<(StatusCode, Json<Fare>), AppError> {
    let fare = records::create(&*state.records.repos().fares, body).await?;
    Ok((StatusCode::CREATED, Json(fare)))
}

async fn update_fare(
    State(state): State<DatabaseState>,
    Path(id): Path<Uuid>,
    Json(body): Json<Fare>,
) -> Result<Json<Fare>, AppError> {
    Ok(Json(state.records.update_fare(id, body).await?))
}

async fn delete_fare(
    State(state): State<DatabaseState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    records::remove(&*state.records.repos().fares, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// Seat

async fn list_seats(State(state): State<DatabaseState>) -> Result<Json<Vec<Seat>>, AppError> {
    Ok(Json(state.records.repos().seats.list().await?))
}

async fn get_seat(
    State(state): State<DatabaseState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Seat>, AppError> {
    Ok(Json(records::find(&*state.records.repos().seats, id).await?))
}

async fn create_seat(
    State(state): State<DatabaseState>,
    Path((flight_id, fare_id)): Path<(Uuid, Uuid)>,
    Json(body): Json<Seat>,
) -> Result<(StatusCode, Json<Seat>), AppError> {
    let seat = state.records.create_seat(flight_id, fare_id, body).await?;
    Ok((StatusCode::CREATED, Json(seat)))
}

async fn update_seat(
    State(state): State<DatabaseState>,
    Path(id): Path<Uuid>,
    Json(body): Json<Seat>,
) -> Result<Json<Seat>, AppError> {
    Ok(Json(state.records.update_seat(id, body).await?))
}

async fn delete_seat(
    State(state): State<DatabaseState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    records::remove(&*state.records.repos().seats, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
