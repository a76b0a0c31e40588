//! In-memory TTL cache for the remote quote list

use crate::services::QuoteList;
use std::sync::RwLock;
use std::time::{Duration, Instant};

/// Holds the most recent non-empty remote list until it expires
pub struct QuoteCache {
    ttl: Duration,
    entry: RwLock<Option<CacheEntry>>,
}

struct CacheEntry {
    quotes: QuoteList,
    expires_at: Instant,
}

impl QuoteCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entry: RwLock::new(None),
        }
    }

    /// Get the cached list if it has not expired
    pub fn get(&self) -> Option<QuoteList> {
        let guard = self.entry.read().unwrap_or_else(|e| e.into_inner());
        guard
            .as_ref()
            .filter(|entry| Instant::now() < entry.expires_at)
            .map(|entry| entry.quotes.clone())
    }

    pub fn set(&self, quotes: QuoteList) {
        let mut guard = self.entry.write().unwrap_or_else(|e| e.into_inner());
        *guard = Some(CacheEntry {
            quotes,
            expires_at: Instant::now() + self.ttl,
        });
    }

    pub fn invalidate(&self) {
        let mut guard = self.entry.write().unwrap_or_else(|e| e.into_inner());
        *guard = None;
    }
}
