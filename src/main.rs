use dotenvy::dotenv;
use tracing::info;

use streampack::app;
use streampack::config::settings::AppConfig;
use streampack::infrastructure::storage::local::StorageDirs;
use streampack::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting server...");

    let config = AppConfig::new();
    let storage = StorageDirs::new(&config);
    storage.bootstrap()?;

    let port = config.server_port;
    let state = AppState::new(config, storage);
    let app = app::create_app(state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    info!("Server running on http://0.0.0.0:{}", port);

    axum::serve(listener, app).await?;

    Ok(())
}
