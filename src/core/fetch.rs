use crate::core::cache::NameCache;
use crate::domain::model::{NameRecord, NameRecordSet};
use crate::domain::ports::{ConfigProvider, NationalityProvider};
use crate::utils::error::{NationalityError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::sync::Arc;

pub const DEFAULT_API_ENDPOINT: &str = "https://api.nationalize.io";

#[derive(Debug, Deserialize)]
struct NationalizeResponse {
    count: Option<u64>,
    country: Vec<CountryProbability>,
}

#[derive(Debug, Deserialize)]
struct CountryProbability {
    country_id: Option<String>,
    probability: f64,
}

/// HTTP client for the nationalize.io API.
pub struct NationalizeClient {
    client: Client,
    endpoint: String,
}

impl NationalizeClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().map_err(|e| NationalityError::ConfigError {
            message: format!("HTTP client setup failed: {}", e),
        })?;

        Ok(Self {
            client,
            endpoint: config.api_endpoint().to_string(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl NationalityProvider for NationalizeClient {
    async fn fetch(&self, name: &str) -> Result<Vec<NameRecord>> {
        tracing::debug!("Requesting nationality data for '{}' from {}", name, self.endpoint);

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("name", name)])
            .send()
            .await
            .map_err(|source| NationalityError::Network {
                name: name.to_string(),
                source,
            })?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            return Err(NationalityError::Status {
                name: name.to_string(),
                status: status.as_u16(),
            });
        }

        // 先讀成文字再解析，讓傳輸錯誤和格式錯誤分開回報
        let body = response
            .text()
            .await
            .map_err(|source| NationalityError::Network {
                name: name.to_string(),
                source,
            })?;

        let decoded: NationalizeResponse =
            serde_json::from_str(&body).map_err(|source| NationalityError::Decode {
                name: name.to_string(),
                source,
            })?;

        if let Some(count) = decoded.count {
            tracing::debug!("Service has {} samples for '{}'", count, name);
        }

        Ok(decoded
            .country
            .into_iter()
            .map(|c| NameRecord::new(name, c.country_id.unwrap_or_default(), c.probability))
            .collect())
    }
}

/// Outcome of warming the cache for a list of names.
#[derive(Debug, Default)]
pub struct PrefetchSummary {
    pub fetched: usize,
    pub already_cached: usize,
    pub failed: Vec<(String, NationalityError)>,
}

/// Fetches names through a provider and stores successful results in the cache.
pub struct FetchAdapter<P: NationalityProvider> {
    provider: P,
    cache: Arc<NameCache>,
}

impl<P: NationalityProvider> FetchAdapter<P> {
    pub fn new(provider: P, cache: Arc<NameCache>) -> Self {
        Self { provider, cache }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Fetch `name` and store the result under that exact key.
    ///
    /// On failure the cache is left untouched and the error is returned to
    /// the caller after being logged.
    pub async fn populate(&self, name: &str) -> Result<Arc<NameRecordSet>> {
        match self.provider.fetch(name).await {
            Ok(records) => {
                let count = records.len();
                let set = self.cache.insert(NameRecordSet::new(name, records));
                tracing::info!("Cached {} countries for '{}'", count, name);
                Ok(set)
            }
            Err(e) => {
                tracing::warn!("Error getting nationality data for name {}: {}", name, e);
                Err(e)
            }
        }
    }

    /// Populate every name that is not cached yet, in order.
    pub async fn prefetch(&self, names: &[String]) -> PrefetchSummary {
        let mut summary = PrefetchSummary::default();

        for name in names {
            if self.cache.contains(name) {
                summary.already_cached += 1;
                continue;
            }

            match self.populate(name).await {
                Ok(_) => summary.fetched += 1,
                Err(e) => summary.failed.push((name.clone(), e)),
            }
        }

        tracing::debug!(
            "Prefetch done: {} fetched, {} cached, {} failed",
            summary.fetched,
            summary.already_cached,
            summary.failed.len()
        );
        summary
    }
}
