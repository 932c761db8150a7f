//! Airlines, aircraft, airports and airline employees.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use skywings_core::records;
use skywings_shared::models::{Aircraft, Airline, Airport, Employee, Flight};
use uuid::Uuid;

use crate::error::AppError;
use crate::state::DatabaseState;

pub fn routes() -> Router<DatabaseState> {
    Router::new()
        .route("/airline/get/all", get(list_airlines))
        .route("/airline/get/{id}", get(get_airline))
        .route("/airline/create", post(create_airline))
        .route("/airline/update/{id}", post(update_airline))
        .route("/airline/delete/{id}", delete(delete_airline))
        .route("/aircraft", get(list_aircraft))
        .route(
            "/aircraft/{id}",
            get(get_aircraft).put(update_aircraft).delete(delete_aircraft),
        )
        .route("/aircraft/create/{airline_id}", post(create_aircraft))
        .route("/aircraft/{id}/flights", get(aircraft_flights))
        .route("/airport", get(list_airports))
        .route(
            "/airport/{id}",
            get(get_airport).put(update_airport).delete(delete_airport),
        )
        .route("/airport/create", post(create_airport))
        .route("/employee", get(list_employees))
        .route("/employee/get/{id}", get(get_employee))
        .route("/employee/create/admin", post(create_admin))
        .route("/employee/create/{airline_id}", post(create_employee))
        .route("/employee/{id}", put(update_employee).delete(delete_employee))
}

// Airline

async fn list_airlines(State(state): State<DatabaseState>) -> Result<Json<Vec<Airline>>, AppError> {
    Ok(Json(state.records.repos().airlines.list().await?))
}

async fn get_airline(
    State(state): State<DatabaseState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Airline>, AppError> {
    Ok(Json(records::find(&*state.records.repos().airlines, id).await?))
}

async fn create_airline(
    State(state): State<DatabaseState>,
    Json(body): Json<Airline>,
) -> Result<(StatusCode, Json<Airline>), AppError> {
    let airline = records::create(&*state.records.repos().airlines, body).await?;
    Ok((StatusCode::CREATED, Json(airline)))
}

async fn update_airline(
    State(state): State<DatabaseState>,
    Path(id): Path<Uuid>,
    Json(body): Json<Airline>,
) -> Result<Json<Airline>, AppError> {
    Ok(Json(state.records.update_airline(id, body).await?))
}

async fn delete_airline(
    State(state): State<DatabaseState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    records::remove(&*state.records.repos().airlines, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// Aircraft

async fn list_aircraft(State(state): State<DatabaseState>) -> Result<Json<Vec<Aircraft>>, AppError> {
    Ok(Json(state.records.repos().aircraft.list().await?))
}

async fn get_aircraft(
    State(state): State<DatabaseState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Aircraft>, AppError> {
    Ok(Json(records::find(&*state.records.repos().aircraft, id).await?))
}

async fn create_aircraft(
    State(state): State<DatabaseState>,
    Path(airline_id): Path<Uuid>,
    Json(body): Json<Aircraft>,
) -> Result<(StatusCode, Json<Aircraft>), AppError> {
    let aircraft = state.records.create_aircraft(airline_id, body).await?;
    Ok((StatusCode::CREATED, Json(aircraft)))
}

async fn update_aircraft(
    State(state): State<DatabaseState>,
    Path(id): Path<Uuid>,
    Json(body): Json<Aircraft>,
) -> Result<Json<Aircraft>, AppError> {
    Ok(Json(state.records.update_aircraft(id, body).await?))
}

async fn delete_aircraft(
    State(state): State<DatabaseState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    records::remove(&*state.records.repos().aircraft, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn aircraft_flights(
    State(state): State<DatabaseState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<Flight>>, AppError> {
    Ok(Json(state.records.flights_for_aircraft(id).await?))
}

// Airport

async fn list_airports(State(state): State<DatabaseState>) -> Result<Json<Vec<Airport>>, AppError> {
    Ok(Json(state.records.repos().airports.list().await?))
}

async fn get_airport(
    State(state): State<DatabaseState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Airport>, AppError> {
    Ok(Json(records::find(&*state.records.repos().airports, id).await?))
}

async fn create_airport(
    State(state): State<DatabaseState>,
    Json(body): Json<Airport>,
) -> Result<(StatusCode, Json<Airport>), AppError> {
    let airport = records::create(&*state.records.repos().airports, body).await?;
    Ok((StatusCode::CREATED, Json(airport)))
}

async fn update_airport(
    State(state): State<DatabaseState>,
    Path(id): Path<Uuid>,
    Json(body): Json<Airport>,
) -> Result<Json<Airport>, AppError> {
    Ok(Json(state.records.update_airport(id, body).await?))
}

async fn delete_airport(
    State(state): State<DatabaseState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    records::remove(&*state.records.repos().airports, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// Employee

async fn list_employees(State(state): State<DatabaseState>) -> Result<Json<Vec<Employee>>, AppError> {
    Ok(Json(state.records.repos().employees.list().await?))
}

async fn get_employee(
    State(state): State<DatabaseState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Employee>, AppError> {
    Ok(Json(records::find(&*state.records.repos().employees, id).await?))
}

async fn create_admin(
    State(state): State<DatabaseState>,
    Json(body): Json<Employee>,
) -> Result<(StatusCode, Json<Employee>), AppError> {
    let admin = state.records.create_admin(body).await?;
    Ok((StatusCode::CREATED, Json(admin)))
}

async fn create_employee(
    State(state): State<DatabaseState>,
    Path(airline_id): Path<Uuid>,
    Json(body): Json<Employee>,
) -> Result<(StatusCode, Json<Employee>), AppError> {
    let employee = state.records.create_employee(airline_id, body).await?;
    Ok((StatusCode::CREATED, Json(employee)))
}

async fn update_employee(
    State(state): State<DatabaseState>,
    Path(id): Path<Uuid>,
    Json(body): Json<Employee>,
) -> Result<Json<Employee>, AppError> {
    Ok(Json(state.records.update_employee(id, body).await?))
}

async fn delete_employee(
    State(state): State<DatabaseState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    records::remove(&*state.records.repos().employees, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
