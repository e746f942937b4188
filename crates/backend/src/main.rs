pub mod api;
pub mod domain;
pub mod routes;
pub mod shared;
pub mod system;

use std::sync::Arc;

use axum::http::{header, Method};
use axum::middleware;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};

use domain::separacion_ecd::MockDataSource;
use routes::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = shared::config::load_config()?;
    system::tracing::initialize(&config.logging)?;

    match shared::config::config_path() {
        Some(path) => tracing::info!("Loaded config from: {}", path.display()),
        None => tracing::info!("Using default embedded configuration"),
    }

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    // Client-side routes fall back to index.html
    let static_dir = std::path::Path::new(&config.server.static_dir);
    let static_files = ServeDir::new(static_dir)
        .not_found_service(ServeFile::new(static_dir.join("index.html")));
    tracing::info!("Serving frontend from {}", static_dir.display());

    let state = AppState {
        source: Arc::new(MockDataSource),
        data: config.data.clone(),
    };

    let app = routes::configure_routes(state)
        .fallback_service(static_files)
        .layer(middleware::from_fn(
            system::middleware::request_logger::request_logger,
        ))
        .layer(cors);

    let addr = config.server.address();
    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(&addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Port {} is already in use. Please ensure no other process is using it.",
                    config.server.port
                );
            } else {
                tracing::error!("Failed to bind to {}. Error: {}", addr, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
