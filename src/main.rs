use std::sync::Arc;

use anyhow::Result;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use ozonprofit::clients::HttpClient;
use ozonprofit::config::Settings;
use ozonprofit::router::create_router;
use ozonprofit::services::{DashboardService, MarketplaceClient};
use ozonprofit::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = Settings::new()?;

    tracing::info!("Starting OzonProfit API service");

    // The marketplace client is built once here and injected everywhere;
    // there is no module-level shared state.
    let http = HttpClient::new(&settings.ozon)?;
    let client = Arc::new(MarketplaceClient::new(http, settings.ozon.base_url.clone()));
    let state = AppState::new(DashboardService::new(client));

    let app = create_router(state);

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;

    tracing::info!("Listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
