use shuttle_server::config::ServerConfig;
use shuttle_server::shuttle::ShuttleClient;
use shuttle_server::web::{AppState, create_router};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run().await {
        error!("{e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env()?;

    let shuttle = ShuttleClient::new(config.shuttle.clone())?;
    let app = create_router(AppState::new(shuttle));

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!(addr = %config.bind_addr, upstream = %config.shuttle.base_url, "shuttle location server listening");
    info!("  GET  /                 - Service banner");
    info!("  GET  /health           - Health check");
    info!("  GET  /v1/bus-locations - Live bus locations");

    axum::serve(listener, app).await?;
    Ok(())
}
