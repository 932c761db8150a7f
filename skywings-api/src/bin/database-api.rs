use skywings_api::{database_app, server, state::DatabaseState};
use skywings_core::records::RecordService;
use skywings_store::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    server::init_tracing();

    let config = Config::load()?;
    let repos = skywings_store::open_repositories(&config.storage).await?;

    let state = DatabaseState {
        records: RecordService::new(repos),
    };
    let app = database_app(state, server::rate_limit_state(&config)?);

    server::serve(
        "database-api",
        app,
        &config.server.host,
        config.server.ports.database_api,
    )
    .await
}
