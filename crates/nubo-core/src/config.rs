//! Application configuration.
//!
//! Stored as TOML. Every section and key is optional; missing values fall
//! back to the defaults below so an absent file behaves like an empty one.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::Result;

/// Storage key the session record is persisted under.
pub const DEFAULT_STORAGE_KEY: &str = "auth_user";

/// Public IP echo service used to enrich the session record.
pub const DEFAULT_IP_LOOKUP_URL: &str = "https://api.ipify.org?format=json";

pub const DEFAULT_IP_LOOKUP_TIMEOUT_SECS: u64 = 3;

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    #[serde(default)]
    pub session: SessionSettings,
    #[serde(default)]
    pub credentials: CredentialSettings,
}

impl AppConfig {
    /// Parses a configuration document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

/// Session store settings.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SessionSettings {
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    #[serde(default = "default_ip_lookup_url")]
    pub ip_lookup_url: String,
    /// Upper bound on the IP enrichment call during login.
    #[serde(default = "default_ip_lookup_timeout_secs")]
    pub ip_lookup_timeout_secs: u64,
}

impl SessionSettings {
    pub fn ip_lookup_timeout(&self) -> Duration {
        Duration::from_secs(self.ip_lookup_timeout_secs)
    }
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            ip_lookup_url: default_ip_lookup_url(),
            ip_lookup_timeout_secs: default_ip_lookup_timeout_secs(),
        }
    }
}

/// The single account accepted by the static credential verifier.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CredentialSettings {
    #[serde(default = "default_email")]
    pub email: String,
    #[serde(default = "default_password")]
    pub password: String,
    #[serde(default = "default_display_name")]
    pub display_name: String,
}

impl Default for CredentialSettings {
    fn default() -> Self {
        Self {
            email: default_email(),
            password: default_password(),
            display_name: default_display_name(),
        }
    }
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_ip_lookup_url() -> String {
    DEFAULT_IP_LOOKUP_URL.to_string()
}

fn default_ip_lookup_timeout_secs() -> u64 {
    DEFAULT_IP_LOOKUP_TIMEOUT_SECS
}

fn default_email() -> String {
    "usertest@gmail.com".to_string()
}

fn default_password() -> String {
    "q1w2e3R4".to_string()
}

fn default_display_name() -> String {
    "Usuario Test".to_string()
}
