//! Session domain module.
//!
//! # Module Structure
//!
//! - `model`: `SessionRecord` and `SessionUpdate`
//! - `storage`: durable key/value capability the store persists through
//! - `credentials`: credential verification capability
//! - `ip_lookup`: best-effort public IP enrichment capability
//! - `store`: `SessionStore`, the login/logout state machine
//! - `guard`: route guard consulted before protected screens
//!
//! # Usage
//!
//! ```ignore
//! use nubo_core::session::{SessionStore, StaticCredentialVerifier};
//! ```

mod credentials;
mod error;
mod guard;
mod ip_lookup;
mod model;
mod storage;
mod store;

pub use credentials::{CredentialVerifier, StaticCredentialVerifier};
pub use error::AuthError;
pub use guard::{DEFAULT_LANDING_PATH, GuardDecision, LOGIN_PATH, RouteGuard, post_login_target};
pub use ip_lookup::{DisabledIpLookup, IpLookup, IpLookupError};
pub use model::{IP_UNAVAILABLE, Role, SessionRecord, SessionUpdate};
pub use storage::DurableStorage;
pub use store::SessionStore;
