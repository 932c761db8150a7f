//! airline-api: `POST /api/v1/airline/register`.

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use skywings_shared::dto::AirlineDetailsDto;
use skywings_shared::models::Airline;

use crate::error::AppError;
use crate::state::AirlineState;

pub fn routes() -> Router<AirlineState> {
    Router::new().route("/api/v1/airline/register", post(register_airline))
}

/// Creates the airline and its administrator in database-api.
async fn register_airline(
    State(state): State<AirlineState>,
    Json(details): Json<AirlineDetailsDto>,
) -> Result<(StatusCode, Json<Airline>), AppError> {
    let airline = state.airlines.register(&details).await?;
    Ok((StatusCode::CREATED, Json(airline)))
}
