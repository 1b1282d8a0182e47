use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt};

use attendance::shared::infrastructure::clock::SystemClock;
use attendance::shared::infrastructure::record_store::in_memory::InMemoryRecordStore;
use attendance::shell::config::Config;
use attendance::shell::http::router;
use attendance::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))?;
    fmt().with_env_filter(filter).init();

    // In-memory deps for now
    let store = Arc::new(InMemoryRecordStore::new());
    let state = AppState::new(store, Arc::new(SystemClock));

    let app = router(state).layer(TraceLayer::new_for_http());

    tracing::info!("attendance endpoint: http://{}/attendance", config.http_addr);
    let listener = tokio::net::TcpListener::bind(config.http_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
