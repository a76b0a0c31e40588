//! Server configuration, read from the environment once at startup

use anyhow::{Context, Result};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use tracing::{info, warn};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_CORS_ORIGIN: &str = "*";

/// Which flavor of the quote service to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceVariant {
    /// Remote store when configured, authored fallback list, CRUD endpoint
    Persistent,
    /// Compiled-in list only, no `/api/quotes`, no authors
    Static,
}

impl ServiceVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceVariant::Persistent => "persistent",
            ServiceVariant::Static => "static",
        }
    }
}

impl fmt::Display for ServiceVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceVariant {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "persistent" => Ok(ServiceVariant::Persistent),
            "static" => Ok(ServiceVariant::Static),
            other => anyhow::bail!("unknown service variant: {}", other),
        }
    }
}

/// Connection settings for the remote quote store
#[derive(Clone, PartialEq, Eq)]
pub struct RemoteConfig {
    pub base_url: String,
    pub api_key: String,
}

// Keep the key out of logs.
impl fmt::Debug for RemoteConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RemoteConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_address: String,
    pub variant: ServiceVariant,
    pub remote: Option<RemoteConfig>,
    pub cors_origin: String,
    pub cache_ttl: Option<Duration>,
    pub store_timeout: Option<Duration>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment...");
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup; empty values count as unset
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_address = get("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());

        let variant = match get("QUOTE_VARIANT") {
            Some(v) => v.parse().context("Invalid QUOTE_VARIANT")?,
            None => ServiceVariant::Persistent,
        };

        let remote = match (get("SUPABASE_URL"), get("SUPABASE_API_KEY")) {
            (Some(url), Some(key)) => Some(RemoteConfig {
                base_url: url.trim_end_matches('/').to_string(),
                api_key: key,
            }),
            (Some(_), None) | (None, Some(_)) => {
                warn!("Only one of SUPABASE_URL / SUPABASE_API_KEY is set, ignoring remote store");
                None
            }
            (None, None) => None,
        };

        let remote = match (variant, remote) {
            (ServiceVariant::Static, Some(_)) => {
                warn!("Remote store configured but variant is static, ignoring it");
                None
            }
            (_, remote) => remote,
        };

        let cors_origin = get("CORS_ALLOW_ORIGIN").unwrap_or_else(|| DEFAULT_CORS_ORIGIN.to_string());

        let cache_ttl = parse_secs(get("QUOTE_CACHE_TTL_SECS"), "QUOTE_CACHE_TTL_SECS")?;
        let store_timeout = parse_secs(get("QUOTE_STORE_TIMEOUT_SECS"), "QUOTE_STORE_TIMEOUT_SECS")?;

        Ok(Config {
            bind_address,
            variant,
            remote,
            cors_origin,
            cache_ttl,
            store_timeout,
        })
    }
}

/// Zero means disabled
fn parse_secs(value: Option<String>, name: &str) -> Result<Option<Duration>> {
    let Some(value) = value else {
        return Ok(None);
    };
    let secs: u64 = value
        .trim()
        .parse()
        .with_context(|| format!("Invalid {}: {}", name, value))?;
    Ok((secs > 0).then(|| Duration::from_secs(secs)))
}
