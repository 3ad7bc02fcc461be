use std::sync::Arc;

use common::storage::ObjectStore;
use tracing::{Level, info};

use server::config::AppConfig;
use server::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let config = AppConfig::load()?;

    let db = server::database::init_db(&config.database.url).await?;
    let store = Arc::new(ObjectStore::new(&config.storage)?);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState { db, store, config };
    let app = server::build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server running at http://{addr}");
    axum::serve(listener, app).await?;

    Ok(())
}
