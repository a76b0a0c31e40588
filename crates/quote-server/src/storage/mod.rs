//! Storage layer
//!
//! The remote store is a Supabase REST table; the cache keeps the last
//! remote list in memory when a TTL is configured.

pub mod cache;
pub mod remote;

pub use cache::QuoteCache;
pub use remote::{QuoteStore, StoreError, SupabaseStore};
