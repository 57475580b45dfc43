//! Session store.
//!
//! Owns the authenticated-user record, mirrors it into durable storage and
//! drives the login/logout transitions. All collaborators are injected, so
//! tests and alternative front ends can substitute their own.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::config::SessionSettings;
use crate::error::{NuboError, Result};

use super::credentials::CredentialVerifier;
use super::error::AuthError;
use super::ip_lookup::IpLookup;
use super::model::{IP_UNAVAILABLE, Role, SessionRecord, SessionUpdate};
use super::storage::DurableStorage;

/// Explicit session state holder with an in-memory record and a durable mirror.
///
/// # Example
///
/// ```ignore
/// let store = SessionStore::open(storage, verifier, ip_lookup, settings).await?;
/// let record = store.login("usertest@gmail.com", "q1w2e3R4").await?;
/// assert_eq!(store.current_session().await, Some(record));
/// ```
pub struct SessionStore {
    storage: Arc<dyn DurableStorage>,
    verifier: Arc<dyn CredentialVerifier>,
    ip_lookup: Arc<dyn IpLookup>,
    settings: SessionSettings,
    current: RwLock<Option<SessionRecord>>,
    login_in_progress: AtomicBool,
}

impl SessionStore {
    /// Creates the store and rehydrates any persisted session.
    ///
    /// A payload that does not decode as a session record is removed from
    /// storage and the store starts logged out.
    pub async fn open(
        storage: Arc<dyn DurableStorage>,
        verifier: Arc<dyn CredentialVerifier>,
        ip_lookup: Arc<dyn IpLookup>,
        settings: SessionSettings,
    ) -> Result<Self> {
        let store = Self {
            storage,
            verifier,
            ip_lookup,
            settings,
            current: RwLock::new(None),
            login_in_progress: AtomicBool::new(false),
        };

        let restored = match store.read_persisted().await {
            Ok(restored) => restored,
            Err(e) if e.is_corrupt() => {
                tracing::warn!("Discarding persisted session: {}", e);
                if let Err(clear_err) = store.storage.clear(&store.settings.storage_key).await {
                    tracing::warn!("Failed to clear corrupt session entry: {}", clear_err);
                }
                None
            }
            Err(e) => return Err(e),
        };
        if let Some(record) = &restored {
            tracing::debug!(email = %record.email, "Restored persisted session");
        }
        *store.current.write().await = restored;

        Ok(store)
    }

    /// Validates the credentials and starts a new session.
    ///
    /// Exactly one storage write happens on success and none on failure.
    /// Only one login may be in flight; overlapping calls are rejected with
    /// [`AuthError::LoginInProgress`].
    pub async fn login(&self, email: &str, password: &str) -> std::result::Result<SessionRecord, AuthError> {
        let _in_flight = LoginGuard::acquire(&self.login_in_progress).ok_or_else(|| {
            tracing::warn!("Rejected login: another login is in progress");
            AuthError::LoginInProgress
        })?;

        if email.is_empty() || password.is_empty() {
            tracing::info!("Rejected login: missing credentials");
            return Err(AuthError::MissingCredentials);
        }

        if !self.verifier.verify(email, password).await {
            tracing::info!(email = %email, "Rejected login: invalid credentials");
            return Err(AuthError::InvalidCredentials);
        }

        let ip = self.resolve_ip().await;
        // An unreadable entry is left for the write below to replace.
        let last_login = match self.read_persisted().await {
            Ok(previous) => previous.map(|p| p.current_login),
            Err(e) if e.is_corrupt() => {
                tracing::warn!("Replacing unreadable persisted session: {}", e);
                None
            }
            Err(e) => return Err(e.into()),
        };

        let record = SessionRecord {
            id: account_id(email),
            email: email.to_string(),
            display_name: self.verifier.display_name(email),
            role: Role::User,
            ip,
            current_login: Utc::now(),
            last_login,
        };

        self.persist(&record).await?;
        *self.current.write().await = Some(record.clone());

        tracing::info!(
            email = %record.email,
            first_session = record.is_first_session(),
            "Login succeeded"
        );
        Ok(record)
    }

    /// Ends the session. Safe to call when already logged out.
    pub async fn logout(&self) -> Result<()> {
        let had_session = self.current.write().await.take().is_some();
        self.storage.clear(&self.settings.storage_key).await?;
        if had_session {
            tracing::info!("Logged out");
        }
        Ok(())
    }

    pub async fn current_session(&self) -> Option<SessionRecord> {
        self.current.read().await.clone()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.current.read().await.is_some()
    }

    pub fn is_login_in_progress(&self) -> bool {
        self.login_in_progress.load(Ordering::Acquire)
    }

    /// Merges `update` into the active record and re-persists it.
    pub async fn update_session(
        &self,
        update: SessionUpdate,
    ) -> std::result::Result<SessionRecord, AuthError> {
        let mut current = self.current.write().await;
        let mut record = current.clone().ok_or(AuthError::NoActiveSession)?;

        record.merge(update);
        self.persist(&record).await?;
        *current = Some(record.clone());

        tracing::debug!(email = %record.email, "Session updated");
        Ok(record)
    }

    /// Best-effort public IP, bounded by the configured timeout.
    async fn resolve_ip(&self) -> String {
        let timeout = self.settings.ip_lookup_timeout();
        match tokio::time::timeout(timeout, self.ip_lookup.lookup()).await {
            Ok(Ok(ip)) if !ip.trim().is_empty() => ip.trim().to_string(),
            Ok(Ok(_)) => {
                tracing::warn!("IP lookup returned an empty address, using sentinel");
                IP_UNAVAILABLE.to_string()
            }
            Ok(Err(e)) => {
                tracing::warn!("IP lookup failed, using sentinel: {}", e);
                IP_UNAVAILABLE.to_string()
            }
            Err(_) => {
                tracing::warn!(
                    timeout_ms = timeout.as_millis() as u64,
                    "IP lookup timed out, using sentinel"
                );
                IP_UNAVAILABLE.to_string()
            }
        }
    }

    /// Reads the persisted record. Payloads that cannot be read or decoded
    /// come back as [`NuboError::CorruptPersistedState`].
    async fn read_persisted(&self) -> Result<Option<SessionRecord>> {
        let key = &self.settings.storage_key;
        match self.storage.read(key).await? {
            Some(payload) => decode(key, &payload).map(Some),
            None => Ok(None),
        }
    }

    async fn persist(&self, record: &SessionRecord) -> Result<()> {
        let payload = serde_json::to_string(record)?;
        self.storage
            .write(&self.settings.storage_key, &payload)
            .await
    }
}

fn decode(key: &str, payload: &str) -> Result<SessionRecord> {
    serde_json::from_str(payload).map_err(|e| NuboError::corrupt(key, e.to_string()))
}

/// Stable opaque identifier for an account.
fn account_id(email: &str) -> String {
    Uuid::new_v5(&Uuid::NAMESPACE_OID, email.as_bytes()).to_string()
}

/// Holds the in-flight flag for the duration of one login.
struct LoginGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> LoginGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for LoginGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
