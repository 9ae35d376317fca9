use dotenvy::dotenv;
use envconfig::Envconfig;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

pub mod config;
pub mod db;
pub mod handlers;

use config::Config;
use handlers::AppState;

type Error = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Initialize the logger with default settings or "info" level if not specified
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    log::info!("Starting the medicine inventory service...");

    // Load environment variables from a .env file if present
    dotenv().ok();

    // Initialize configuration from environment variables
    let config = Config::init_from_env()?;
    let bind_addr = config.bind_addr;

    let state = AppState {
        connect_options: config.connect_options(),
    };

    // All origins, methods, and headers are allowed: the API is consumed by
    // a browser frontend served from a different origin.
    let app = handlers::router()
        .layer(CorsLayer::permissive())
        .with_state(Arc::new(state));

    let listener = TcpListener::bind(bind_addr).await?;
    log::info!("Listening on {}", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log::info!("Shutting down gracefully");
    Ok(())
}

/// Waits for Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => log::info!("Received Ctrl+C, shutting down"),
        _ = terminate => log::info!("Received SIGTERM, shutting down"),
    }
}
