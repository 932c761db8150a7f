use std::sync::Arc;

use skywings_api::{customer_app, server, state::CustomerState};
use skywings_connector::{HttpAuthApi, HttpDatabaseApi};
use skywings_core::customer::CustomerService;
use skywings_store::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    server::init_tracing();

    let config = Config::load()?;
    let db = HttpDatabaseApi::new(&server::client_settings(
        &config,
        &config.upstream.database_api_url,
    ))?;
    let auth = HttpAuthApi::new(&server::client_settings(&config, &config.upstream.auth_api_url))?;

    let state = CustomerState {
        customers: CustomerService::new(Arc::new(db), Arc::new(auth)),
    };
    let app = customer_app(state, server::rate_limit_state(&config)?);

    server::serve(
        "customer-api",
        app,
        &config.server.host,
        config.server.ports.customer_api,
    )
    .await
}
