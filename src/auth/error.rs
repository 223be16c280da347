//! Error types for sign-in and registration
//!
//! Every variant is recoverable: the form shows the message and stays usable.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// The form failed local validation; nothing was sent
    #[error("{0}")]
    InvalidInput(String),

    /// The identity provider refused the credentials or the new account
    #[error("{0}")]
    Rejected(String),

    /// The backend could not be reached or answered with garbage
    #[error("Network error: {0}")]
    Transport(String),

    /// The account was created but its user record could not be written.
    /// `rolled_back` tells whether the account was deleted again.
    #[error("Could not save your profile: {message}")]
    PersistenceFailure { message: String, rolled_back: bool },
}

impl AuthError {
    pub fn invalid(message: impl Into<String>) -> Self {
        AuthError::InvalidInput(message.into())
    }
}

impl From<reqwest::Error> for AuthError {
    fn from(e: reqwest::Error) -> Self {
        AuthError::Transport(e.to_string())
    }
}

/// Result type alias for auth operations
pub type AuthResult<T> = Result<T, AuthError>;
