//! employee-api: `POST /api/v1/airline/employee/register`.

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use skywings_shared::dto::EmployeeDto;
use skywings_shared::models::Employee;

use crate::error::AppError;
use crate::state::EmployeeState;

pub fn routes() -> Router<EmployeeState> {
    Router::new().route("/api/v1/airline/employee/register", post(register_employee))
}

async fn register_employee(
    State(state): State<EmployeeState>,
    Json(dto): Json<EmployeeDto>,
) -> Result<(StatusCode, Json<Employee>), AppError> {
    let employee = state.employees.register(&dto).await?;
    Ok((StatusCode::CREATED, Json(employee)))
}
