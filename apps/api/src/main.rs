mod analysis;
mod auth;
mod config;
mod errors;
mod extraction;
mod json;
mod llm_client;
mod models;
mod routes;
mod state;
#[cfg(test)]
mod test_support;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::auth::store::InMemoryUserStore;
use crate::auth::token::TokenIssuer;
use crate::auth::AuthService;
use crate::config::Config;
use crate::llm_client::{CompletionService, GeminiClient};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting resume reviewer v{}", env!("CARGO_PKG_VERSION"));

    if config.uses_default_secret() {
        warn!("JWT_SECRET is not set; tokens are signed with an insecure default secret");
    }

    let auth = AuthService::new(
        Arc::new(InMemoryUserStore::new()),
        TokenIssuer::new(&config.jwt_secret),
    );

    let llm: Option<Arc<dyn CompletionService>> = match &config.google_api_key {
        Some(key) => {
            let client = GeminiClient::new(key.clone(), config.gemini_model.clone());
            info!("LLM client initialized (model: {})", client.model());
            Some(Arc::new(client))
        }
        None => {
            warn!("GOOGLE_API_KEY is not set; /api/analyze will answer 500");
            None
        }
    };

    info!("Serving static client from {}", config.static_dir);

    let state = AppState {
        auth,
        llm,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
