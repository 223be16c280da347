//! In-process backend for offline mode and tests

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, warn};
use uuid::Uuid;

use super::{AuthError, AuthResult, IdentityHandle, IdentityProvider, RecordStore, Session};

#[derive(Debug, Clone)]
struct Account {
    user_id: String,
    password: String,
}

#[derive(Debug, Default)]
struct Store {
    /// Keyed by email
    accounts: HashMap<String, Account>,
    records: HashMap<(String, String), serde_json::Value>,
}

/// Accounts and records kept in memory
#[derive(Debug, Default)]
pub struct MemoryBackend {
    store: Mutex<Store>,
    fail_record_writes: AtomicBool,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every `put_record` fail until switched back
    pub fn set_fail_record_writes(&self, fail: bool) {
        self.fail_record_writes.store(fail, Ordering::SeqCst);
    }

    pub fn has_account(&self, email: &str) -> bool {
        self.lock()
            .map(|store| store.accounts.contains_key(email))
            .unwrap_or(false)
    }

    pub fn record(&self, collection: &str, key: &str) -> Option<serde_json::Value> {
        self.lock()
            .ok()?
            .records
            .get(&(collection.to_string(), key.to_string()))
            .cloned()
    }

    fn lock(&self) -> AuthResult<MutexGuard<'_, Store>> {
        self.store
            .lock()
            .map_err(|_| AuthError::Transport("memory backend lock poisoned".to_string()))
    }
}

impl IdentityProvider for MemoryBackend {
    fn sign_in(&self, email: &str, password: &str) -> AuthResult<Session> {
        let store = self.lock()?;
        match store.accounts.get(email) {
            Some(account) if account.password == password => Ok(Session {
                user_id: account.user_id.clone(),
                email: email.to_string(),
                token: Uuid::new_v4().to_string(),
            }),
            _ => Err(AuthError::Rejected("Invalid email or password".to_string())),
        }
    }

    fn register_account(&self, email: &str, password: &str) -> AuthResult<IdentityHandle> {
        let mut store = self.lock()?;
        if store.accounts.contains_key(email) {
            return Err(AuthError::Rejected(
                "An account with this email already exists".to_string(),
            ));
        }
        let user_id = Uuid::new_v4().to_string();
        store.accounts.insert(
            email.to_string(),
            Account {
                user_id: user_id.clone(),
                password: password.to_string(),
            },
        );
        debug!("[AUTH] memory account {user_id} created");
        Ok(IdentityHandle {
            user_id,
            email: email.to_string(),
        })
    }

    fn delete_account(&self, handle: &IdentityHandle) -> AuthResult<()> {
        let mut store = self.lock()?;
        let owned = store
            .accounts
            .get(&handle.email)
            .is_some_and(|account| account.user_id == handle.user_id);
        if !owned {
            return Err(AuthError::Rejected(format!("No account {}", handle.user_id)));
        }
        store.accounts.remove(&handle.email);
        Ok(())
    }
}

impl RecordStore for MemoryBackend {
    fn put_record(&self, collection: &str, key: &str, fields: &serde_json::Value) -> AuthResult<()> {
        if self.fail_record_writes.load(Ordering::SeqCst) {
            warn!("[AUTH] refusing record write {collection}/{key}");
            return Err(AuthError::Transport("record store unavailable".to_string()));
        }
        self.lock()?
            .records
            .insert((collection.to_string(), key.to_string()), fields.clone());
        Ok(())
    }
}
