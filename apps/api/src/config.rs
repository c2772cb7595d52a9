use anyhow::{Context, Result};

/// Signing secret used when `JWT_SECRET` is unset. Only suitable for local development.
pub const INSECURE_DEFAULT_SECRET: &str = "insecure-dev-secret-change-me";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Gemini API key. Optional at startup; `/api/analyze` answers 500 without it.
    pub google_api_key: Option<String>,
    pub gemini_model: String,
    pub jwt_secret: String,
    pub static_dir: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            google_api_key: optional_env("GOOGLE_API_KEY"),
            gemini_model: optional_env("GEMINI_MODEL")
                .unwrap_or_else(|| crate::llm_client::DEFAULT_MODEL.to_string()),
            jwt_secret: optional_env("JWT_SECRET")
                .unwrap_or_else(|| INSECURE_DEFAULT_SECRET.to_string()),
            static_dir: optional_env("STATIC_DIR").unwrap_or_else(|| "public".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    pub fn uses_default_secret(&self) -> bool {
        self.jwt_secret == INSECURE_DEFAULT_SECRET
    }
}

/// Reads an env var, treating an empty or whitespace-only value as unset.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
