//! Route guard for protected screens.

use super::store::SessionStore;

pub const LOGIN_PATH: &str = "/login";

/// Where a successful login lands when no destination was requested.
pub const DEFAULT_LANDING_PATH: &str = "/dashboard";

/// What the router should do with a navigation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    /// A login is in flight; show a progress indicator and ask again.
    Pending,
    /// Send the user to `to`, remembering the requested path in `from`.
    Redirect { to: String, from: String },
}

/// Decides access to protected paths from the session store's state.
#[derive(Debug, Clone)]
pub struct RouteGuard {
    public_paths: Vec<String>,
}

impl Default for RouteGuard {
    fn default() -> Self {
        Self {
            public_paths: vec![LOGIN_PATH.to_string()],
        }
    }
}

impl RouteGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a path reachable without a session.
    pub fn with_public_path(mut self, path: impl Into<String>) -> Self {
        self.public_paths.push(path.into());
        self
    }

    pub fn is_public(&self, path: &str) -> bool {
        self.public_paths.iter().any(|p| p == path)
    }

    pub async fn check(&self, store: &SessionStore, path: &str) -> GuardDecision {
        if self.is_public(path) {
            return GuardDecision::Allow;
        }
        if store.is_login_in_progress() {
            return GuardDecision::Pending;
        }
        if store.is_authenticated().await {
            return GuardDecision::Allow;
        }

        tracing::debug!(path = %path, "Redirecting unauthenticated navigation to login");
        GuardDecision::Redirect {
            to: LOGIN_PATH.to_string(),
            from: path.to_string(),
        }
    }
}

/// Destination after a successful login.
pub fn post_login_target(from: Option<&str>) -> &str {
    match from {
        Some(path) if !path.is_empty() && path != LOGIN_PATH => path,
        _ => DEFAULT_LANDING_PATH,
    }
}
