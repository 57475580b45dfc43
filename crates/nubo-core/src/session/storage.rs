//! Durable storage capability.
//!
//! Defines the key/value interface the session store persists through.

use async_trait::async_trait;

use crate::error::Result;

/// A durable key/value store holding serialized payloads.
///
/// This mirrors browser local storage: one string per key, whole-value
/// replacement on write. Implementations decide where the bytes live
/// (a directory of files, memory, a remote store).
///
/// # Implementation Notes
///
/// - `write` must replace the previous value as a whole; readers never see a
///   partially written payload.
/// - `clear` on a missing key is not an error.
#[async_trait]
pub trait DurableStorage: Send + Sync {
    /// Reads the payload stored under `key`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(payload))`: Entry exists
    /// - `Ok(None)`: No entry under this key
    /// - `Err(_)`: The backing store could not be read
    async fn read(&self, key: &str) -> Result<Option<String>>;

    /// Stores `payload` under `key`, replacing any prior entry.
    async fn write(&self, key: &str, payload: &str) -> Result<()>;

    /// Removes the entry under `key` (or does nothing if absent).
    async fn clear(&self, key: &str) -> Result<()>;
}
