//! database-api: CRUD over every federated table under `/api/v1/db`.

use axum::Router;

use crate::state::DatabaseState;

mod bookings;
mod customers;
mod fleet;
mod flights;

pub fn routes() -> Router<DatabaseState> {
    Router::new().nest(
        "/api/v1/db",
        Router::new()
            .merge(fleet::routes())
            .merge(flights::routes())
            .merge(bookings::routes())
            .merge(customers::routes()),
    )
}
