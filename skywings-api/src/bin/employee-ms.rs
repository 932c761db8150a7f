use skywings_api::{server, staff_app, state::StaffState};
use skywings_core::staff::StaffService;
use skywings_store::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    server::init_tracing();

    let config = Config::load()?;
    let repo = skywings_store::open_staff_repository(&config.storage).await?;

    let state = StaffState {
        staff: StaffService::new(repo),
    };
    let app = staff_app(state, server::rate_limit_state(&config)?);

    server::serve(
        "employee-ms",
        app,
        &config.server.host,
        config.server.ports.employee_ms,
    )
    .await
}
