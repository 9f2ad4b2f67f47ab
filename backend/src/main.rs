use std::sync::Arc;

use tracing::{info, warn, Level};

use backend::config::AppConfig;
use backend::{app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    let config = AppConfig::from_env()?;
    if config.sendfox.is_none() {
        warn!("SendFox credentials not set; subscriptions will only be logged");
    }

    let state = Arc::new(AppState::new(&config));

    let listener = tokio::net::TcpListener::bind(("127.0.0.1", config.port)).await?;
    info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app(state).into_make_service()).await?;

    Ok(())
}
