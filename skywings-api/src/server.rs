//! Start-up plumbing shared by the service binaries.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Context;
use axum::Router;
use skywings_connector::{ClientSettings, RetryPolicy};
use skywings_store::{Config, RedisClient};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::state::RateLimitState;

pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "skywings_api=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Connector settings for a sibling service at `base_url`.
pub fn client_settings(config: &Config, base_url: &str) -> ClientSettings {
    ClientSettings {
        base_url: base_url.to_string(),
        timeout: Duration::from_millis(config.upstream.timeout_ms),
        retry: RetryPolicy {
            max_retries: config.upstream.max_retries,
            ..RetryPolicy::default()
        },
        failure_threshold: config.resiliency.failure_threshold,
        reset_timeout: Duration::from_secs(config.resiliency.reset_timeout_seconds),
    }
}

/// `None` unless a `[redis]` section is configured.
pub fn rate_limit_state(config: &Config) -> anyhow::Result<Option<RateLimitState>> {
    let Some(redis) = &config.redis else {
        return Ok(None);
    };
    let client = RedisClient::new(&redis.url).context("invalid redis url")?;
    info!(
        "Rate limiting at {} requests per {}s",
        redis.rate_limit_requests, redis.rate_limit_window_seconds
    );
    Ok(Some(RateLimitState {
        redis: client,
        limit: redis.rate_limit_requests,
        window_seconds: redis.rate_limit_window_seconds,
    }))
}

pub async fn serve(name: &str, app: Router, host: &str, port: u16) -> anyhow::Result<()> {
    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .with_context(|| format!("invalid listen address {}:{}", host, port))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("{} listening on {}", name, addr);

    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("{} has been shut down.", name);
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("starting graceful shutdown...");
}
