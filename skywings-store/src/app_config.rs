use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub auth: AuthConfig,
    pub upstream: UpstreamConfig,
    pub resiliency: ResiliencyConfig,
    pub redis: Option<RedisConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub ports: ServicePorts,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServicePorts {
    pub database_api: u16,
    pub auth_api: u16,
    pub customer_api: u16,
    pub airline_api: u16,
    pub employee_api: u16,
    pub employee_ms: u16,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Postgres,
    Memory,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    pub url: String,
    #[serde(default = "default_pool_size")]
    pub max_connections: u32,
    #[serde(default)]
    pub migrate: bool,
}

fn default_pool_size() -> u32 {
    5
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub jwt_expiration_seconds: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UpstreamConfig {
    pub database_api_url: String,
    pub auth_api_url: String,
    pub timeout_ms: u64,
    #[serde(default)]
    pub max_retries: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ResiliencyConfig {
    pub failure_threshold: u32,
    pub reset_timeout_seconds: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RedisConfig {
    pub url: String,
    pub rate_limit_requests: i64,
    pub rate_limit_window_seconds: i64,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Layered: `default` → `{RUN_MODE}` → `local` → `SKYWINGS__*` env vars.
    pub fn load_from(dir: &str) -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name(&format!("{}/default", dir)))
            // Optional per-environment overrides
            .add_source(config::File::with_name(&format!("{}/{}", dir, run_mode)).required(false))
            // Not checked in
            .add_source(config::File::with_name(&format!("{}/local", dir)).required(false))
            // e.g. `SKYWINGS__STORAGE__BACKEND=memory`
            .add_source(config::Environment::with_prefix("SKYWINGS").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = Config::load_from(concat!(env!("CARGO_MANIFEST_DIR"), "/../config")).unwrap();

        assert_eq!(config.server.ports.database_api, 8080);
        assert_eq!(config.server.ports.employee_ms, 8085);
        assert!(config.auth.jwt_expiration_seconds > 0);
        assert!(config.resiliency.failure_threshold > 0);
        assert!(config.upstream.database_api_url.starts_with("http://"));
    }
}
