//! Customers and the records hanging off them.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use skywings_core::records;
use skywings_shared::models::{Customer, FeedBack, Notification, WaitList};
use uuid::Uuid;

use crate::error::AppError;
use crate::state::DatabaseState;

pub fn routes() -> Router<DatabaseState> {
    Router::new()
        .route("/customer", get(list_customers))
        .route(
            "/customer/{id}",
            get(get_customer).put(update_customer).delete(delete_customer),
        )
        .route("/customer/email/{email}", get(customer_by_email))
        .route("/customer/create", post(create_customer))
        .route("/notification", get(list_notifications))
        .route(
            "/notification/{id}",
            get(get_notification)
                .put(update_notification)
                .delete(delete_notification),
        )
        .route("/notification/create/{customer_id}", post(create_notification))
        .route("/feedback", get(list_feedback))
        .route(
            "/feedback/{id}",
            get(get_feedback).put(update_feedback).delete(delete_feedback),
        )
        .route("/feedback/create/{customer_id}/{flight_id}", post(create_feedback))
        .route("/waitlist", get(list_waitlist))
        .route(
            "/waitlist/{id}",
            get(get_waitlist).put(update_waitlist).delete(delete_waitlist),
        )
        .route("/waitlist/create/{customer_id}/{flight_id}", post(create_waitlist))
}

// Customer

async fn list_customers(State(state): State<DatabaseState>) -> Result<Json<Vec<Customer>>, AppError> {
    Ok(Json(state.records.repos().customers.list().await?))
}

async fn get_customer(
    State(state): State<DatabaseState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Customer>, AppError> {
    Ok(Json(records::find(&*state.records.repos().customers, id).await?))
}

/// GET /api/v1/db/customer/email/{email}
/// Used by auth-api to resolve token subjects.
async fn customer_by_email(
    State(state): State<DatabaseState>,
    Path(email): Path<String>,
) -> Result<Json<Customer>, AppError> {
    Ok(Json(state.records.customer_by_email(&email).await?))
}

async fn create_customer(
    State(state): State<DatabaseState>,
    Json(body): Json<Customer>,
) -> Result<(StatusCode, Json<Customer>), AppError> {
    let customer = records::create(&*state.records.repos().customers, body).await?;
    Ok((StatusCode::CREATED, Json(customer)))
}

async fn update_customer(
    State(state): State<DatabaseState>,
    Path(id): Path<Uuid>,
    Json(body): Json<Customer>,
) -> Result<Json<Customer>, AppError> {
    Ok(Json(state.records.update_customer(id, body).await?))
}

async fn delete_customer(
    State(state): State<DatabaseState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    records::remove(&*state.records.repos().customers, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// Notification

async fn list_notifications(
    State(state): State<DatabaseState>,
) -> Result<Json<Vec<Notification>>, AppError> {
    Ok(Json(state.records.repos().notifications.list().await?))
}

async fn get_notification(
    State(state): State<DatabaseState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Notification>, AppError> {
    Ok(Json(records::find(&*state.records.repos().notifications, id).await?))
}

async fn create_notification(
    State(state): State<DatabaseState>,
    Path(customer_id): Path<Uuid>,
    Json(body): Json<Notification>,
) -> Result<(StatusCode, Json<Notification>), AppError> {
    let notification = state.records.create_notification(customer_id, body).await?;
    Ok((StatusCode::CREATED, Json(notification)))
}

async fn update_notification(
    State(state): State<DatabaseState>,
    Path(id): Path<Uuid>,
    Json(body): Json<Notification>,
) -> Result<Json<Notification>, AppError> {
    Ok(Json(state.records.update_notification(id, body).await?))
}

async fn delete_notification(
    State(state): State<DatabaseState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    records::remove(&*state.records.repos().notifications, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// Feedback

async fn list_feedback(State(state): State<DatabaseState>) -> Result<Json<Vec<FeedBack>>, AppError> {
    Ok(Json(state.records.repos().feedback.list().await?))
}

async fn get_feedback(
    State(state): State<DatabaseState>,
    Path(id): Path<Uuid>,
) -> Result<Json<FeedBack>, AppError> {
    Ok(Json(records::find(&*state.records.repos().feedback, id).await?))
}

async fn create_feedback(
    State(state): State<DatabaseState>,
    Path((customer_id, flight_id)): Path<(Uuid, Uuid)>,
    Json(body): Json<FeedBack>,
) -> Result<(StatusCode, Json<FeedBack>), AppError> {
    let feedback = state.records.create_feedback(customer_id, flight_id, body).await?;
    Ok((StatusCode::CREATED, Json(feedback)))
}

async fn update_feedback(
    State(state): State<DatabaseState>,
    Path(id): Path<Uuid>,
    Json(body): Json<FeedBack>,
) -> Result<Json<FeedBack>, AppError> {
    Ok(Json(state.records.update_feedback(id, body).await?))
}

async fn delete_feedback(
    State(state): State<DatabaseState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    records::remove(&*state.records.repos().feedback, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// Waitlist

async fn list_waitlist(State(state): State<DatabaseState>) -> Result<Json<Vec<WaitList>>, AppError> {
    Ok(Json(state.records.repos().waitlists.list().await?))
}

async fn get_waitlist(
    State(state): State<DatabaseState>,
    Path(id): Path<Uuid>,
) -> Result<Json<WaitList>, AppError> {
    Ok(Json(records::find(&*state.records.repos().waitlists, id).await?))
}

async fn create_waitlist(
    State(state): State<DatabaseState>,
    Path((customer_id, flight_id)): Path<(Uuid, Uuid)>,
    Json(body): Json<WaitList>,
) -> Result<(StatusCode, Json<WaitList>), AppError> {
    let entry = state.records.create_waitlist(customer_id, flight_id, body).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

async fn update_waitlist(
    State(state): State<DatabaseState>,
    Path(id): Path<Uuid>,
    Json(body): Json<WaitList>,
) -> Result<Json<WaitList>, AppError> {
    Ok(Json(state.records.update_waitlist(id, body).await?))
}

async fn delete_waitlist(
    State(state): State<DatabaseState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    records::remove(&*state.records.repos().waitlists, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
