//! Sign-in and registration workflows
//!
//! Registration is two-phase: the account is created first, then its user
//! record is written. If the write fails the account is deleted again so that
//! no account exists without a record.

use tracing::{error, info, warn};

use super::{
    AuthError, AuthResult, IdentityHandle, IdentityProvider, RecordStore, Session, UserRecord,
    USERS_COLLECTION,
};

/// Login form contents
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> AuthResult<()> {
        if self.email.trim().is_empty() || self.password.is_empty() {
            return Err(AuthError::invalid("Please enter email and password"));
        }
        Ok(())
    }
}

/// Registration form contents
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegistrationForm {
    pub fn validate(&self) -> AuthResult<()> {
        if self.email.trim().is_empty() || self.password.is_empty() {
            return Err(AuthError::invalid("Please enter email and password"));
        }
        if self.password != self.confirm_password {
            return Err(AuthError::invalid("Passwords do not match"));
        }
        Ok(())
    }
}

pub fn sign_in(identity: &dyn IdentityProvider, form: &LoginForm) -> AuthResult<Session> {
    form.validate()?;
    let session = identity.sign_in(form.email.trim(), &form.password)?;
    info!("[AUTH] Signed in as {}", session.email);
    Ok(session)
}

/// Create the account and its user record, or neither
pub fn register(
    identity: &dyn IdentityProvider,
    records: &dyn RecordStore,
    form: &RegistrationForm,
) -> AuthResult<IdentityHandle> {
    form.validate()?;
    let handle = identity.register_account(form.email.trim(), &form.password)?;

    let written = serde_json::to_value(UserRecord::from(&handle))
        .map_err(|e| AuthError::Transport(e.to_string()))
        .and_then(|fields| records.put_record(USERS_COLLECTION, &handle.user_id, &fields));

    if let Err(e) = written {
        warn!(
            "[AUTH] User record for {} failed ({}), deleting account",
            handle.user_id, e
        );
        let rolled_back = match identity.delete_account(&handle) {
            Ok(()) => true,
            Err(delete_err) => {
                error!(
                    "[AUTH] Could not delete account {} after failed record write: {}",
                    handle.user_id, delete_err
                );
                false
            }
        };
        return Err(AuthError::PersistenceFailure {
            message: e.to_string(),
            rolled_back,
        });
    }

    info!("[AUTH] Registered {}", handle.email);
    Ok(handle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::MemoryBackend;

    fn form(email: &str, password: &str, confirm: &str) -> RegistrationForm {
        RegistrationForm {
            email: email.to_string(),
            password: password.to_string(),
            confirm_password: confirm.to_string(),
        }
    }

    #[test]
    fn test_mismatched_passwords() {
        let err = form("a@b.c", "one", "two").validate().unwrap_err();
        assert_eq!(err, AuthError::InvalidInput("Passwords do not match".to_string()));
        assert_eq!(err.to_string(), "Passwords do not match");
    }

    #[test]
    fn test_empty_fields() {
        assert!(form("", "pw", "pw").validate().is_err());
        assert!(form("a@b.c", "", "").validate().is_err());
        assert!(LoginForm::default().validate().is_err());
    }

    #[test]
    fn test_register_writes_user_record() {
        let backend = MemoryBackend::new();
        let handle = register(&backend, &backend, &form(" a@b.c ", "pw", "pw")).unwrap();

        assert_eq!(handle.email, "a@b.c");
        let stored = backend.record(USERS_COLLECTION, &handle.user_id).unwrap();
        assert_eq!(
            stored,
            serde_json::json!({ "userId": handle.user_id, "email": "a@b.c" })
        );
        let record: UserRecord = serde_json::from_value(stored).unwrap();
        assert_eq!(record, UserRecord::from(&handle));
    }

    #[test]
    fn test_invalid_form_touches_nothing() {
        let backend = MemoryBackend::new();
        assert!(register(&backend, &backend, &form("a@b.c", "one", "two")).is_err());
        assert!(!backend.has_account("a@b.c"));
    }

    #[test]
    fn test_sign_in_after_register() {
        let backend = MemoryBackend::new();
        register(&backend, &backend, &form("a@b.c", "pw", "pw")).unwrap();
        let login = LoginForm {
            email: "a@b.c".to_string(),
            password: "pw".to_string(),
        };
        assert_eq!(sign_in(&backend, &login).unwrap().email, "a@b.c");
    }
}
