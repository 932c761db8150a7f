use std::sync::Arc;

use skywings_api::{airline_app, server, state::AirlineState};
use skywings_connector::HttpDatabaseApi;
use skywings_core::airline::AirlineService;
use skywings_store::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    server::init_tracing();

    let config = Config::load()?;
    let db = HttpDatabaseApi::new(&server::client_settings(
        &config,
        &config.upstream.database_api_url,
    ))?;

    let state = AirlineState {
        airlines: AirlineService::new(Arc::new(db)),
    };
    let app = airline_app(state, server::rate_limit_state(&config)?);

    server::serve(
        "airline-api",
        app,
        &config.server.host,
        config.server.ports.airline_api,
    )
    .await
}
