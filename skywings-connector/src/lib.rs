//! HTTP connectors between the SkyWings services.

pub mod auth_api;
pub mod breaker;
pub mod client;
pub mod database_api;
pub mod error;
pub mod retry;

pub use auth_api::HttpAuthApi;
pub use breaker::{CircuitBreaker, CircuitState};
pub use client::{ClientSettings, ServiceClient};
pub use database_api::HttpDatabaseApi;
pub use error::ConnectorError;
pub use retry::RetryPolicy;
