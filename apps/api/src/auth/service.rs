use std::sync::Arc;

use tracing::{info, warn};

use crate::auth::store::UserStore;
use crate::auth::token::TokenIssuer;
use crate::auth::{AuthError, Identity, MIN_PASSWORD_LEN};
use crate::models::user::CredentialRecord;

/// Registration, login, and token verification over an injected `UserStore`.
#[derive(Clone)]
pub struct AuthService {
    store: Arc<dyn UserStore>,
    tokens: TokenIssuer,
}

impl AuthService {
    pub fn new(store: Arc<dyn UserStore>, tokens: TokenIssuer) -> Self {
        Self { store, tokens }
    }

    /// Stores a new credential record and returns a fresh session token.
    pub fn register(&self, username: &str, password: &str) -> Result<String, AuthError> {
        let username = require_fields(username, password)?;
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AuthError::InvalidInput(format!(
                "Password must be at least {MIN_PASSWORD_LEN} characters"
            )));
        }

        let record = CredentialRecord::new(username, password);
        let created_at = record.created_at;
        if !self.store.insert_if_absent(record) {
            warn!(username, "registration rejected: username taken");
            return Err(AuthError::Conflict(username.to_string()));
        }

        info!(username, %created_at, "user registered");
        self.tokens.issue(username)
    }

    /// Checks credentials and issues a new token. Prior tokens stay valid until they expire.
    pub fn login(&self, username: &str, password: &str) -> Result<String, AuthError> {
        let username = require_fields(username, password)?;

        let record = self
            .store
            .get(username)
            .filter(|record| record.password == password)
            .ok_or_else(|| {
                warn!(username, "login rejected");
                AuthError::Unauthorized("Invalid username or password".to_string())
            })?;

        info!(username = %record.username, "user logged in");
        self.tokens.issue(&record.username)
    }

    pub fn authenticate(&self, token: Option<&str>) -> Result<Identity, AuthError> {
        let token = token
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AuthError::Unauthorized("Missing session token".to_string()))?;
        self.tokens.verify(token)
    }
}

/// Returns the trimmed username when both fields are present.
fn require_fields<'a>(username: &'a str, password: &str) -> Result<&'a str, AuthError> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err(AuthError::InvalidInput(
            "Username and password are required".to_string(),
        ));
    }
    Ok(username)
}
