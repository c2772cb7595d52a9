use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use crate::models::user::CredentialRecord;

/// Credential storage behind the Auth Gate. Swap the in-memory map for a
/// persistent backend by implementing this trait.
pub trait UserStore: Send + Sync {
    fn get(&self, username: &str) -> Option<CredentialRecord>;

    /// Inserts `record` unless its username is already taken.
    /// Returns `false` and leaves the store untouched on conflict.
    fn insert_if_absent(&self, record: CredentialRecord) -> bool;
}

/// Process-lifetime user map. No eviction, no persistence.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<String, CredentialRecord>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserStore for InMemoryUserStore {
    fn get(&self, username: &str) -> Option<CredentialRecord> {
        self.users
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(username)
            .cloned()
    }

    fn insert_if_absent(&self, record: CredentialRecord) -> bool {
        // Check and insert under one write guard so concurrent registrations
        // of the same name cannot both succeed.
        let mut users = self.users.write().unwrap_or_else(PoisonError::into_inner);
        if users.contains_key(&record.username) {
            return false;
        }
        users.insert(record.username.clone(), record);
        true
    }
}
