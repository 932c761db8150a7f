pub mod auth;
pub mod rate_limit;

pub use auth::{bearer_from_headers, bearer_token, require_principal};
pub use rate_limit::rate_limit_middleware;
