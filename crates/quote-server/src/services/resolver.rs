//! Quote source resolution
//!
//! Decides, per request, whether the remote store or the compiled-in
//! fallback list is authoritative. Resolution never fails: every remote
//! problem folds into the fallback path.

use crate::storage::{QuoteCache, QuoteStore};
use quote_types::Quote;
use std::fmt;
use std::sync::Arc;
use tracing::{info, warn};

/// A non-empty, cheaply clonable list of quotes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteList(Arc<[Quote]>);

impl QuoteList {
    /// Returns `None` for an empty vector
    pub fn new(quotes: Vec<Quote>) -> Option<Self> {
        if quotes.is_empty() {
            None
        } else {
            Some(Self(quotes.into()))
        }
    }

    /// For compiled-in lists, which are never empty
    pub(super) fn from_static(quotes: Vec<Quote>) -> Self {
        debug_assert!(!quotes.is_empty(), "compiled-in quote list is empty");
        Self(quotes.into())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn as_slice(&self) -> &[Quote] {
        &self.0
    }

    #[cfg(test)]
    pub fn contains_text(&self, text: &str) -> bool {
        self.0.iter().any(|q| q.text == text)
    }
}

/// Where a resolved list came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteSource {
    Remote,
    Cached,
    Fallback,
}

impl fmt::Display for QuoteSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            QuoteSource::Remote => "remote",
            QuoteSource::Cached => "cache",
            QuoteSource::Fallback => "fallback",
        })
    }
}

#[derive(Debug, Clone)]
pub struct Resolved {
    pub quotes: QuoteList,
    pub source: QuoteSource,
}

pub struct QuoteResolver {
    store: Option<Arc<dyn QuoteStore>>,
    fallback: QuoteList,
    cache: Option<QuoteCache>,
}

impl QuoteResolver {
    pub fn new(store: Option<Arc<dyn QuoteStore>>, fallback: QuoteList) -> Self {
        Self {
            store,
            fallback,
            cache: None,
        }
    }

    pub fn with_cache(mut self, cache: QuoteCache) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn has_remote(&self) -> bool {
        self.store.is_some()
    }

    /// Produce the authoritative list for this request
    pub async fn resolve(&self) -> Resolved {
        let Some(store) = &self.store else {
            return self.use_fallback();
        };

        if let Some(quotes) = self.cache.as_ref().and_then(QuoteCache::get) {
            info!("Using cached quotes ({} quotes)", quotes.len());
            return Resolved {
                quotes,
                source: QuoteSource::Cached,
            };
        }

        match store.list().await {
            Ok(Some(quotes)) => match QuoteList::new(quotes) {
                Some(quotes) => {
                    info!("Retrieved {} quotes from remote store", quotes.len());
                    if let Some(cache) = &self.cache {
                        cache.set(quotes.clone());
                    }
                    Resolved {
                        quotes,
                        source: QuoteSource::Remote,
                    }
                }
                None => {
                    info!("Remote store returned no quotes");
                    self.use_fallback()
                }
            },
            Ok(None) => {
                info!("Remote store has no quote data");
                self.use_fallback()
            }
            Err(e) => {
                warn!("Remote store error: {}", e);
                self.use_fallback()
            }
        }
    }

    /// Drop any cached remote list, e.g. after a write
    pub fn invalidate(&self) {
        if let Some(cache) = &self.cache {
            cache.invalidate();
        }
    }

    fn use_fallback(&self) -> Resolved {
        info!("Using fallback quotes");
        Resolved {
            quotes: self.fallback.clone(),
            source: QuoteSource::Fallback,
        }
    }
}
