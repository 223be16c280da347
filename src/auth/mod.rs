//! Identity and record persistence clients
//!
//! The app talks to two collaborators: an [`IdentityProvider`] that owns
//! accounts and sessions, and a [`RecordStore`] for per-user documents. Both
//! are blocking traits; callers run them on Bevy's compute task pool. The
//! implementations in use are injected once as the [`AuthServices`] resource.
//!
//! - [`http::HttpBackend`] - JSON over HTTP against the TapChess backend
//! - [`memory::MemoryBackend`] - in-process accounts for offline mode and tests

pub mod error;
pub mod http;
pub mod memory;
pub mod workflow;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub use error::{AuthError, AuthResult};
pub use http::HttpBackend;
pub use memory::MemoryBackend;
pub use workflow::{register, sign_in, LoginForm, RegistrationForm};

/// Collection holding one record per registered user
pub const USERS_COLLECTION: &str = "users";

/// A signed-in user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: String,
    pub email: String,
    pub token: String,
}

/// A freshly created account, kept around for compensation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityHandle {
    pub user_id: String,
    pub email: String,
}

/// Document written to [`USERS_COLLECTION`] on registration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub user_id: String,
    pub email: String,
}

impl From<&IdentityHandle> for UserRecord {
    fn from(handle: &IdentityHandle) -> Self {
        Self {
            user_id: handle.user_id.clone(),
            email: handle.email.clone(),
        }
    }
}

/// Account and session operations
pub trait IdentityProvider: Send + Sync {
    fn sign_in(&self, email: &str, password: &str) -> AuthResult<Session>;

    fn register_account(&self, email: &str, password: &str) -> AuthResult<IdentityHandle>;

    /// Remove an account created by `register_account`
    fn delete_account(&self, handle: &IdentityHandle) -> AuthResult<()>;
}

/// Keyed document writes
pub trait RecordStore: Send + Sync {
    fn put_record(&self, collection: &str, key: &str, fields: &serde_json::Value) -> AuthResult<()>;
}

/// Backend collaborators shared with auth tasks
#[derive(Resource, Clone)]
pub struct AuthServices {
    pub identity: Arc<dyn IdentityProvider>,
    pub records: Arc<dyn RecordStore>,
}

impl AuthServices {
    pub fn new(identity: Arc<dyn IdentityProvider>, records: Arc<dyn RecordStore>) -> Self {
        Self { identity, records }
    }

    /// One backend serving both roles
    pub fn from_backend<B>(backend: Arc<B>) -> Self
    where
        B: IdentityProvider + RecordStore + 'static,
    {
        Self {
            identity: backend.clone(),
            records: backend,
        }
    }

    /// In-memory services for offline play
    pub fn offline() -> Self {
        Self::from_backend(Arc::new(MemoryBackend::new()))
    }
}

/// The signed-in user, if any
#[derive(Resource, Debug, Default, Clone)]
pub struct CurrentSession(pub Option<Session>);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_record_field_names() {
        let record = UserRecord {
            user_id: "u1".to_string(),
            email: "a@b.c".to_string(),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json, serde_json::json!({ "userId": "u1", "email": "a@b.c" }));
    }
}
