use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::api::handlers;
use crate::domain::separacion_ecd::ProcessDataSource;
use crate::shared::config::DataConfig;

/// Shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn ProcessDataSource>,
    pub data: DataConfig,
}

/// All API routes of the application
pub fn configure_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route(
            "/api/separacion-ecd",
            get(handlers::separacion_ecd::get_data),
        )
        .route(
            "/api/separacion-ecd/columns",
            get(handlers::separacion_ecd::list_columns),
        )
        .route(
            "/api/separacion-ecd/actions",
            get(handlers::separacion_ecd::list_actions),
        )
        .route(
            "/api/separacion-ecd/validate",
            post(handlers::separacion_ecd::validate),
        )
        .route(
            "/api/separacion-ecd/execute",
            post(handlers::separacion_ecd::execute),
        )
        .route(
            "/api/separacion-ecd/delete",
            post(handlers::separacion_ecd::delete),
        )
        .with_state(state)
}
