use std::sync::Arc;

use skywings_api::{employee_app, server, state::EmployeeState};
use skywings_connector::HttpDatabaseApi;
use skywings_core::employee::EmployeeService;
use skywings_store::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    server::init_tracing();

    let config = Config::load()?;
    let db = HttpDatabaseApi::new(&server::client_settings(
        &config,
        &config.upstream.database_api_url,
    ))?;

    let state = EmployeeState {
        employees: EmployeeService::new(Arc::new(db)),
    };
    let app = employee_app(state, server::rate_limit_state(&config)?);

    server::serve(
        "employee-api",
        app,
        &config.server.host,
        config.server.ports.employee_api,
    )
    .await
}
