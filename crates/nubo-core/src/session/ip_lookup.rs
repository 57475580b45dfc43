//! Public IP lookup capability.
//!
//! The lookup is a best-effort enrichment of the session record. Its error
//! type stays here; the session store reduces any failure to
//! [`IP_UNAVAILABLE`](super::model::IP_UNAVAILABLE).

use async_trait::async_trait;
use thiserror::Error;

/// Why a public IP lookup did not produce an address.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IpLookupError {
    #[error("IP lookup request failed: {0}")]
    Request(String),

    #[error("IP lookup returned status {0}")]
    Status(u16),

    #[error("IP lookup response could not be parsed: {0}")]
    InvalidResponse(String),

    #[error("IP lookup timed out after {0} ms")]
    Timeout(u128),
}

#[async_trait]
pub trait IpLookup: Send + Sync {
    /// Returns the caller's public IP as a string.
    async fn lookup(&self) -> Result<String, IpLookupError>;
}

/// Lookup that never reaches the network. Used when enrichment is disabled.
#[derive(Debug, Clone, Default)]
pub struct DisabledIpLookup;

#[async_trait]
impl IpLookup for DisabledIpLookup {
    async fn lookup(&self) -> Result<String, IpLookupError> {
        Err(IpLookupError::Request("IP lookup disabled".to_string()))
    }
}
