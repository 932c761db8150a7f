use std::sync::Arc;

use skywings_api::{auth_app, server, state::AuthState};
use skywings_connector::HttpDatabaseApi;
use skywings_core::auth::AuthService;
use skywings_core::token::TokenCodec;
use skywings_store::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    server::init_tracing();

    let config = Config::load()?;
    let settings = server::client_settings(&config, &config.upstream.database_api_url);
    let directory = Arc::new(HttpDatabaseApi::new(&settings)?);

    let codec = TokenCodec::new(
        config.auth.jwt_secret.clone(),
        config.auth.jwt_expiration_seconds,
    );
    let state = AuthState {
        auth: AuthService::new(codec, directory),
    };
    let app = auth_app(state, server::rate_limit_state(&config)?);

    server::serve("auth-api", app, &config.server.host, config.server.ports.auth_api).await
}
