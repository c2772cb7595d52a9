pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::analysis::handlers::handle_analyze;
use crate::auth::handlers::{handle_login, handle_register};
use crate::extraction::handlers::{handle_extract, MAX_PDF_BYTES};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    // Anything outside /api is the browser client.
    let static_files = ServeDir::new(&state.config.static_dir);

    Router::new()
        .route("/api/health", get(health::health_handler))
        .route("/api/register", post(handle_register))
        .route("/api/login", post(handle_login))
        .route("/api/analyze", post(handle_analyze))
        .route(
            "/api/extract",
            post(handle_extract).layer(DefaultBodyLimit::max(MAX_PDF_BYTES)),
        )
        .fallback_service(static_files)
        .with_state(state)
}
