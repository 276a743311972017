use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::StatusCode;
use axum::Router;
use log::{error, info};
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::compression::CompressionLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::TocSettings;
use crate::server::app::create_app;
use crate::server::config::ServerConfig;
use crate::server::types::BoxResult;
use crate::utils::error::TocError;

/// Serve the configured root directory, generating tables of contents on the fly
pub async fn serve(server_config: &ServerConfig, settings: TocSettings) -> BoxResult<()> {
    let root = &server_config.root;
    if !root.is_dir() {
        error!("Directory {} does not exist", root.display());
        return Err(TocError::Server(format!("Directory not found: {}", root.display())).into());
    }

    let app = apply_layers(create_app(server_config, Arc::new(settings)), server_config);

    let addr: SocketAddr = server_config.address_string().parse()?;
    let listener = TcpListener::bind(addr).await?;

    info!("Serving files from {}", root.display());
    print_server_banner(server_config);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Wrap the app in compression, timeout, tracing and panic recovery
fn apply_layers(app: Router, server_config: &ServerConfig) -> Router {
    app.layer(CompressionLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            server_config.request_timeout,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::new())
}

async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => info!("Shutting down server (received Ctrl+C)..."),
        Err(e) => {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    }
}

/// Print a banner with server information
fn print_server_banner(server_config: &ServerConfig) {
    println!("\n{}", "-".repeat(60));
    println!(" Toclet Server");
    println!(" - URL: {}", server_config.url());
    println!(" - Root: {}", server_config.root.display());
    println!(" - Compression: Enabled");
    println!(" - Press Ctrl+C to stop");
    println!("{}\n", "-".repeat(60));
}
