//! Remote quote store (Supabase REST table)

use crate::config::RemoteConfig;
use async_trait::async_trait;
use quote_types::{NewQuote, Quote};
use reqwest::{Client as ReqwestClient, RequestBuilder, StatusCode};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

pub type StoreResult<T> = std::result::Result<T, StoreError>;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Remote store request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Malformed quote payload: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Read/write access to the external quote table
#[async_trait]
pub trait QuoteStore: Send + Sync {
    /// All rows. `Ok(None)` means the store answered without data
    /// (any non-200 status).
    async fn list(&self) -> StoreResult<Option<Vec<Quote>>>;

    /// Insert one row. Succeeds once the exchange completes; the response
    /// status is not inspected.
    async fn create(&self, quote: &NewQuote) -> StoreResult<()>;
}

pub struct SupabaseStore {
    http: ReqwestClient,
    base_url: String,
    api_key: String,
}

impl SupabaseStore {
    pub fn new(remote: &RemoteConfig, timeout: Option<Duration>) -> StoreResult<Self> {
        let mut builder = ReqwestClient::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            base_url: remote.base_url.clone(),
            api_key: remote.api_key.clone(),
        })
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/quotes", self.base_url)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }
}

#[async_trait]
impl QuoteStore for SupabaseStore {
    async fn list(&self) -> StoreResult<Option<Vec<Quote>>> {
        let response = self
            .authorized(self.http.get(self.table_url()).query(&[("select", "*")]))
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            // Table might not exist yet
            debug!("Remote store answered {} to list, treating as no data", status);
            return Ok(None);
        }

        let body = response.bytes().await?;
        let quotes: Vec<Quote> = serde_json::from_slice(&body)?;
        debug!("Remote store returned {} quotes", quotes.len());

        Ok(Some(quotes))
    }

    async fn create(&self, quote: &NewQuote) -> StoreResult<()> {
        let response = self
            .authorized(self.http.post(self.table_url()))
            .json(quote)
            .send()
            .await?;

        debug!("Remote store answered {} to create", response.status());
        Ok(())
    }
}
