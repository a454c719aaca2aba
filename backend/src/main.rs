use std::net::SocketAddr;
use std::path::PathBuf;

use tracing::{info, Level};

use user_profile_backend::backend::config::AppConfig;
use user_profile_backend::backend::{create_router, initialize_backend};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    // Optional config file path as first argument
    let config = match std::env::args().nth(1) {
        Some(path) => AppConfig::load_or_default(&PathBuf::from(path)),
        None => AppConfig::default(),
    };

    let state = initialize_backend(config)?;
    let app = create_router(state);

    // Start the server
    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
