//! Wiring of the core services for one CLI invocation.

use std::sync::Arc;

use anyhow::{Context, Result};
use nubo_core::config::AppConfig;
use nubo_core::session::{DisabledIpLookup, IpLookup, SessionStore, StaticCredentialVerifier};
use nubo_infrastructure::{ConfigService, FileStorage, HttpIpLookup, NuboPaths};

use crate::GlobalArgs;

pub struct AppContext {
    pub config: AppConfig,
    pub store: SessionStore,
}

impl AppContext {
    pub async fn build(args: &GlobalArgs) -> Result<Self> {
        let paths = NuboPaths::new(args.base_dir.clone());
        let config_service = match &args.config {
            Some(path) => ConfigService::new(path),
            None => ConfigService::from_paths(&paths)?,
        };
        let config = config_service
            .load()
            .with_context(|| format!("Failed to load {}", config_service.path().display()))?;

        let storage = Arc::new(FileStorage::new(paths.storage_dir()?));
        let verifier = Arc::new(StaticCredentialVerifier::from(&config.credentials));
        let ip_lookup: Arc<dyn IpLookup> = if args.offline {
            Arc::new(DisabledIpLookup)
        } else {
            Arc::new(HttpIpLookup::from_settings(&config.session))
        };

        tracing::debug!(storage = %storage.dir().display(), "Opening session store");
        let store = SessionStore::open(storage, verifier, ip_lookup, config.session.clone())
            .await
            .context("Failed to open session store")?;

        Ok(Self { config, store })
    }
}
