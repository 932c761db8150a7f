//! employee-ms under `/api/employees`. Errors use this service's own body
//! shape, `{"error": CODE, "message": ...}`, with validation failures
//! reported as a bare `field -> message` map.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use skywings_core::CoreError;
use skywings_shared::dto::StaffMemberDto;
use skywings_shared::models::StaffMember;

use crate::state::StaffState;

#[derive(Debug)]
pub struct StaffError(CoreError);

impl From<CoreError> for StaffError {
    fn from(err: CoreError) -> Self {
        Self(err)
    }
}

impl IntoResponse for StaffError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self.0 {
            CoreError::FieldErrors(fields) => {
                return (StatusCode::BAD_REQUEST, Json(fields)).into_response();
            }
            CoreError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg),
            CoreError::ValidationError(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg),
            other => {
                tracing::error!("employee-ms request failed: {}", other);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_SERVER_ERROR",
                    other.to_string(),
                )
            }
        };

        (status, Json(json!({ "error": code, "message": message }))).into_response()
    }
}

pub fn routes() -> Router<StaffState> {
    Router::new()
        .route("/api/employees", get(list).post(create))
        .route("/api/employees/{id}", get(get_one).put(update).delete(remove))
}

async fn create(
    State(state): State<StaffState>,
    Json(dto): Json<StaffMemberDto>,
) -> Result<(StatusCode, Json<StaffMember>), StaffError> {
    let member = state.staff.create(dto).await?;
    Ok((StatusCode::CREATED, Json(member)))
}

async fn get_one(
    State(state): State<StaffState>,
    Path(id): Path<i64>,
) -> Result<Json<StaffMember>, StaffError> {
    Ok(Json(state.staff.get(id).await?))
}

async fn list(State(state): State<StaffState>) -> Result<Json<Vec<StaffMember>>, StaffError> {
    Ok(Json(state.staff.list().await?))
}

async fn update(
    State(state): State<StaffState>,
    Path(id): Path<i64>,
    Json(dto): Json<StaffMemberDto>,
) -> Result<Json<StaffMember>, StaffError> {
    Ok(Json(state.staff.update(id, dto).await?))
}

async fn remove(State(state): State<StaffState>, Path(id): Path<i64>) -> Result<StatusCode, StaffError> {
    state.staff.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
