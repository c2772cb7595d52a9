//! Auth Gate — username/password registration, login, and stateless session tokens.
//!
//! Credentials live in an injectable `UserStore`. Tokens are HS256 JWTs valid for 24h;
//! nothing about a session is kept server-side.

pub mod extractor;
pub mod handlers;
pub mod service;
pub mod store;
pub mod token;

use thiserror::Error;

pub use service::AuthService;

/// Minimum accepted password length at registration.
pub const MIN_PASSWORD_LEN: usize = 4;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("username '{0}' already exists")]
    Conflict(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("token signing failed: {0}")]
    Signing(#[from] jsonwebtoken::errors::Error),
}

/// The authenticated caller, as asserted by a verified session token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub username: String,
}
