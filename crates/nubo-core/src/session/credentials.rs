//! Credential verification capability.

use async_trait::async_trait;

use crate::config::CredentialSettings;

/// Accepts or rejects an (email, password) pair.
///
/// The session store only needs the yes/no answer; how the check is made
/// (a fixed pair, a directory service, a remote API) is up to the
/// implementation.
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    async fn verify(&self, email: &str, password: &str) -> bool;

    /// Display name to record for an accepted account.
    ///
    /// Defaults to the local part of the e-mail address.
    fn display_name(&self, email: &str) -> String {
        email.split('@').next().unwrap_or(email).to_string()
    }
}

/// Verifier backed by a single configured account.
#[derive(Debug, Clone)]
pub struct StaticCredentialVerifier {
    email: String,
    password: String,
    display_name: String,
}

impl StaticCredentialVerifier {
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            display_name: display_name.into(),
        }
    }
}

impl From<&CredentialSettings> for StaticCredentialVerifier {
    fn from(settings: &CredentialSettings) -> Self {
        Self::new(
            settings.email.clone(),
            settings.password.clone(),
            settings.display_name.clone(),
        )
    }
}

impl Default for StaticCredentialVerifier {
    fn default() -> Self {
        Self::from(&CredentialSettings::default())
    }
}

#[async_trait]
impl CredentialVerifier for StaticCredentialVerifier {
    async fn verify(&self, email: &str, password: &str) -> bool {
        email == self.email && password == self.password
    }

    fn display_name(&self, email: &str) -> String {
        if email == self.email {
            self.display_name.clone()
        } else {
            email.split('@').next().unwrap_or(email).to_string()
        }
    }
}
