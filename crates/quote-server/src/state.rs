use crate::config::Config;
use crate::services::{fallback_quotes, QuoteResolver, RandomSelector};
use crate::storage::{QuoteCache, QuoteStore, SupabaseStore};
use anyhow::{Context, Result};
use std::sync::Arc;
use std::time::SystemTime;
use tracing::{info, warn};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: Option<Arc<dyn QuoteStore>>,
    pub resolver: Arc<QuoteResolver>,
    pub selector: Arc<RandomSelector>,
    pub start_time: SystemTime,
}

impl AppState {
    /// Build the state for a config, connecting the remote store if one is set
    pub fn from_config(config: Config) -> Result<Self> {
        let store: Option<Arc<dyn QuoteStore>> = match &config.remote {
            Some(remote) => {
                info!("Connecting to remote quote store: {}", remote.base_url);
                let store = SupabaseStore::new(remote, config.store_timeout)
                    .context("Failed to build remote store client")?;
                Some(Arc::new(store) as Arc<dyn QuoteStore>)
            }
            None => {
                warn!("No remote quote store configured, serving fallback quotes only");
                None
            }
        };

        Ok(Self::with_store(config, store, RandomSelector::new()))
    }

    pub fn with_store(
        config: Config,
        store: Option<Arc<dyn QuoteStore>>,
        selector: RandomSelector,
    ) -> Self {
        let mut resolver = QuoteResolver::new(store.clone(), fallback_quotes(config.variant));
        if let Some(ttl) = config.cache_ttl {
            info!("Caching remote quotes for {}s", ttl.as_secs());
            resolver = resolver.with_cache(QuoteCache::new(ttl));
        }

        Self {
            config: Arc::new(config),
            store,
            resolver: Arc::new(resolver),
            selector: Arc::new(selector),
            start_time: SystemTime::now(),
        }
    }
}
