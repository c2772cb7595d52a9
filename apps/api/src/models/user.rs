use chrono::{DateTime, Utc};

/// A registered user. Immutable once stored; lives until process exit.
#[derive(Debug, Clone)]
pub struct CredentialRecord {
    pub username: String,
    /// Stored in cleartext. Acceptable only because nothing outlives the process.
    pub password: String,
    pub created_at: DateTime<Utc>,
}

impl CredentialRecord {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            created_at: Utc::now(),
        }
    }
}
