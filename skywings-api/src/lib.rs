use axum::{http::Method, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

use middleware::rate_limit_middleware;
use state::{
    AirlineState, AuthState, CustomerState, DatabaseState, EmployeeState, RateLimitState,
    StaffState,
};

pub fn database_app(state: DatabaseState, rate_limit: Option<RateLimitState>) -> Router {
    with_common_layers(routes::database::routes().with_state(state), rate_limit)
}

pub fn auth_app(state: AuthState, rate_limit: Option<RateLimitState>) -> Router {
    with_common_layers(routes::auth::routes(state.clone()).with_state(state), rate_limit)
}

pub fn customer_app(state: CustomerState, rate_limit: Option<RateLimitState>) -> Router {
    with_common_layers(routes::customers::routes().with_state(state), rate_limit)
}

pub fn airline_app(state: AirlineState, rate_limit: Option<RateLimitState>) -> Router {
    with_common_layers(routes::airlines::routes().with_state(state), rate_limit)
}

pub fn employee_app(state: EmployeeState, rate_limit: Option<RateLimitState>) -> Router {
    with_common_layers(routes::employees::routes().with_state(state), rate_limit)
}

pub fn staff_app(state: StaffState, rate_limit: Option<RateLimitState>) -> Router {
    with_common_layers(routes::staff::routes().with_state(state), rate_limit)
}

fn with_common_layers(router: Router, rate_limit: Option<RateLimitState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            axum::http::header::AUTHORIZATION,
            axum::http::header::CONTENT_TYPE,
            axum::http::header::USER_AGENT,
        ]);

    let router = router.layer(cors).layer(TraceLayer::new_for_http());

    match rate_limit {
        Some(limits) => router.layer(axum::middleware::from_fn_with_state(
            limits,
            rate_limit_middleware,
        )),
        None => router,
    }
}
