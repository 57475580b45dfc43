use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use nubo_core::config::SessionSettings;
use nubo_core::error::Result;
use nubo_core::session::{
    AuthError, CredentialVerifier, DurableStorage, GuardDecision, IpLookup, IpLookupError,
    RouteGuard, SessionStore, post_login_target,
};

#[derive(Default)]
struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

#[async_trait]
impl DurableStorage for MemoryStorage {
    async fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    async fn write(&self, key: &str, payload: &str) -> Result<()> {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), payload.to_string());
        Ok(())
    }

    async fn clear(&self, key: &str) -> Result<()> {
        self.entries.lock().unwrap().remove(key);
        Ok(())
    }
}

// Verifier that accepts any address on the nubo.test domain with password "ok".
struct DomainVerifier;

#[async_trait]
impl CredentialVerifier for DomainVerifier {
    async fn verify(&self, email: &str, password: &str) -> bool {
        email.ends_with("@nubo.test") && password == "ok"
    }
}

struct NoNetwork;

#[async_trait]
impl IpLookup for NoNetwork {
    async fn lookup(&self) -> std::result::Result<String, IpLookupError> {
        Err(IpLookupError::Request("offline".to_string()))
    }
}

struct SlowNetwork;

#[async_trait]
impl IpLookup for SlowNetwork {
    async fn lookup(&self) -> std::result::Result<String, IpLookupError> {
        tokio::time::sleep(Duration::from_secs(60)).await;
        Ok("198.51.100.1".to_string())
    }
}

async fn open(storage: Arc<MemoryStorage>, key: &str) -> SessionStore {
    let settings = SessionSettings {
        storage_key: key.to_string(),
        ..SessionSettings::default()
    };
    SessionStore::open(storage, Arc::new(DomainVerifier), Arc::new(NoNetwork), settings)
        .await
        .unwrap()
}

#[tokio::test]
async fn test_guarded_navigation_round_trip() {
    let storage = Arc::new(MemoryStorage::default());
    let store = open(storage.clone(), "session").await;
    let guard = RouteGuard::new();

    let (to, from) = match guard.check(&store, "/etf/gestion-orden").await {
        GuardDecision::Redirect { to, from } => (to, from),
        other => panic!("expected redirect, got {:?}", other),
    };
    assert_eq!(to, "/login");
    assert_eq!(guard.check(&store, &to).await, GuardDecision::Allow);

    let record = store.login("ana@nubo.test", "ok").await.unwrap();
    assert_eq!(record.display_name, "ana");
    assert!(record.ip_unavailable());
    assert_eq!(post_login_target(Some(from.as_str())), "/etf/gestion-orden");
    assert_eq!(guard.check(&store, &from).await, GuardDecision::Allow);

    store.logout().await.unwrap();
    assert!(matches!(
        guard.check(&store, &from).await,
        GuardDecision::Redirect { .. }
    ));
}

#[tokio::test]
async fn test_custom_storage_key_is_used() {
    let storage = Arc::new(MemoryStorage::default());
    let store = open(storage.clone(), "session").await;

    store.login("ana@nubo.test", "ok").await.unwrap();

    let entries = storage.entries.lock().unwrap();
    assert!(entries.contains_key("session"));
    assert!(!entries.contains_key("auth_user"));
}

#[tokio::test]
async fn test_last_login_shifts_across_restarts() {
    let storage = Arc::new(MemoryStorage::default());

    let first = open(storage.clone(), "session")
        .await
        .login("ana@nubo.test", "ok")
        .await
        .unwrap();
    let restarted = open(storage.clone(), "session").await;
    assert_eq!(restarted.current_session().await.as_ref(), Some(&first));

    let second = restarted.login("ana@nubo.test", "ok").await.unwrap();
    assert_eq!(second.last_login, Some(first.current_login));
}

#[tokio::test]
async fn test_rejected_login_leaves_storage_untouched() {
    let storage = Arc::new(MemoryStorage::default());
    let store = open(storage.clone(), "session").await;

    let err = store.login("ana@other.test", "ok").await.unwrap_err();

    assert_eq!(err, AuthError::InvalidCredentials);
    assert_eq!(err.to_string(), "Invalid credentials");
    assert!(storage.entries.lock().unwrap().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_guard_is_pending_while_login_runs() {
    let storage = Arc::new(MemoryStorage::default());
    let store = Arc::new(
        SessionStore::open(
            storage,
            Arc::new(DomainVerifier),
            Arc::new(SlowNetwork),
            SessionSettings::default(),
        )
        .await
        .unwrap(),
    );
    let guard = RouteGuard::new();

    let login = {
        let store = store.clone();
        tokio::spawn(async move { store.login("ana@nubo.test", "ok").await })
    };
    while !store.is_login_in_progress() {
        tokio::task::yield_now().await;
    }

    assert_eq!(guard.check(&store, "/etf/gestion-orden").await, GuardDecision::Pending);
    assert_eq!(guard.check(&store, "/login").await, GuardDecision::Allow);

    let record = login.await.unwrap().unwrap();
    assert!(record.ip_unavailable());
    assert!(!store.is_login_in_progress());
    assert_eq!(guard.check(&store, "/etf/gestion-orden").await, GuardDecision::Allow);
}
