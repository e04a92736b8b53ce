//! Profile store REST client.
//!
//! Speaks the store's PostgREST-style row surface: inserts and upserts via
//! POST with `Prefer` headers, primary-key lookups via `id=eq.` filters,
//! updates via PATCH. Rows travel as plain JSON.

use std::time::Duration;

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::error::{StoreError, StoreResult};

/// Profile store client configuration.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Base URL of the store
    pub base_url: String,
    /// Service key, sent as `apikey` and bearer token
    pub api_key: String,
    /// Request timeout
    pub timeout: Duration,
}

impl StoreConfig {
    /// Create config from environment variables.
    pub fn from_env() -> StoreResult<Self> {
        let base_url = std::env::var("STORE_BASE_URL")
            .map_err(|_| StoreError::config("STORE_BASE_URL must be set"))?;
        let api_key = std::env::var("STORE_API_KEY")
            .map_err(|_| StoreError::config("STORE_API_KEY must be set"))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            timeout: Duration::from_secs(10),
        })
    }
}

/// Profile store REST client.
#[derive(Clone)]
pub struct StoreClient {
    http: Client,
    config: StoreConfig,
}

impl StoreClient {
    /// Create a new store client.
    pub fn new(config: StoreConfig) -> StoreResult<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .pool_idle_timeout(Duration::from_secs(90))
            .user_agent(concat!("gitvitals-store/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(StoreError::Network)?;

        Ok(Self { http, config })
    }

    /// Create from environment variables.
    pub fn from_env() -> StoreResult<Self> {
        Self::new(StoreConfig::from_env()?)
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.config.base_url, table)
    }

    fn authed(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .header("apikey", &self.config.api_key)
            .bearer_auth(&self.config.api_key)
    }

    /// Insert one row, returning the stored representation.
    pub async fn insert<T, R>(&self, table: &str, row: &T) -> StoreResult<R>
    where
        T: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        debug!("Inserting row into {}", table);

        let response = self
            .authed(self.http.post(self.table_url(table)))
            .header("Prefer", "return=representation")
            .json(row)
            .send()
            .await?;

        let rows: Vec<R> = Self::json_body(response).await?;
        rows.into_iter()
            .next()
            .ok_or_else(|| StoreError::InvalidResponse(format!("{table}: insert returned no row")))
    }

    /// Insert or merge one row keyed by primary key.
    pub async fn upsert<T, R>(&self, table: &str, row: &T) -> StoreResult<R>
    where
        T: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        debug!("Upserting row into {}", table);

        let response = self
            .authed(self.http.post(self.table_url(table)))
            .header(
                "Prefer",
                "resolution=merge-duplicates,return=representation",
            )
            .json(row)
            .send()
            .await?;

        let rows: Vec<R> = Self::json_body(response).await?;
        rows.into_iter()
            .next()
            .ok_or_else(|| StoreError::InvalidResponse(format!("{table}: upsert returned no row")))
    }

    /// Look up one row by primary key. `Ok(None)` when absent.
    pub async fn find_by_id<R>(&self, table: &str, id: &str) -> StoreResult<Option<R>>
    where
        R: DeserializeOwned,
    {
        let url = format!(
            "{}?id=eq.{}&limit=1",
            self.table_url(table),
            urlencoding::encode(id)
        );

        let response = self.authed(self.http.get(&url)).send().await?;
        let rows: Vec<R> = Self::json_body(response).await?;
        Ok(rows.into_iter().next())
    }

    /// Patch one row by primary key.
    pub async fn update_by_id<T>(&self, table: &str, id: &str, patch: &T) -> StoreResult<()>
    where
        T: Serialize + ?Sized,
    {
        let url = format!(
            "{}?id=eq.{}",
            self.table_url(table),
            urlencoding::encode(id)
        );

        let response = self
            .authed(self.http.patch(&url))
            .json(patch)
            .send()
            .await?;

        Self::check(response).await?;
        Ok(())
    }

    /// Connectivity probe for the readiness endpoint.
    pub async fn health(&self) -> StoreResult<()> {
        let url = format!("{}/rest/v1/", self.config.base_url);
        let response = self.authed(self.http.get(&url)).send().await?;
        Self::check(response).await?;
        Ok(())
    }

    async fn check(response: Response) -> StoreResult<String> {
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(StoreError::from_http_status(status.as_u16(), text));
        }
        Ok(text)
    }

    async fn json_body<R: DeserializeOwned>(response: Response) -> StoreResult<R> {
        let text = Self::check(response).await?;
        Ok(serde_json::from_str(&text)?)
    }
}
