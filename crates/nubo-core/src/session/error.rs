//! Errors reported by the session store.

use thiserror::Error;

use crate::error::NuboError;

/// Outcome of a rejected session operation.
///
/// `MissingCredentials` and `InvalidCredentials` are meant to be shown to the
/// user as-is. `NoActiveSession` indicates a caller bug. Storage failures are
/// wrapped rather than flattened so the underlying cause stays inspectable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Email and password are required")]
    MissingCredentials,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("A login is already in progress")]
    LoginInProgress,

    #[error("No active session")]
    NoActiveSession,

    #[error(transparent)]
    Storage(#[from] NuboError),
}

impl AuthError {
    /// True for errors the user can fix by editing the login form.
    pub fn is_user_correctable(&self) -> bool {
        matches!(self, Self::MissingCredentials | Self::InvalidCredentials)
    }
}
