//! HTTP client for the public PokeAPI.
//!
//! Decoded JSON bodies are memoized by request URL for the lifetime of the
//! client, so repeated lookups of the same record cost one request. Failed
//! requests are never cached.

use std::collections::HashMap;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use super::records::{CreatureDetail, EvolutionChainRecord, NamedResource, SpeciesRecord, TypeRecord};
use super::DataSource;
use crate::config::AtlasConfig;
use crate::errors::{DataSourceError, DataSourceResult};
use crate::names;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ListPage {
    results: Vec<NamedResource>,
}

#[derive(Debug)]
pub struct PokeApiClient {
    http: reqwest::Client,
    base_url: String,
    cache: Mutex<HashMap<String, Value>>,
}

impl PokeApiClient {
    pub fn new(config: &AtlasConfig) -> DataSourceResult<Self> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| DataSourceError::Transport {
                url: config.base_url.clone(),
                message: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_owned(),
            cache: Mutex::new(HashMap::new()),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn resource_url(&self, resource: &str, name_or_id: &str) -> String {
        format!(
            "{}/{}/{}",
            self.base_url,
            resource,
            names::normalize_key(name_or_id)
        )
    }

    /// Number of memoized responses.
    pub async fn cached_responses(&self) -> usize {
        self.cache.lock().await.len()
    }

    #[cfg(test)]
    pub(crate) async fn seed_cache(&self, url: &str, body: Value) {
        self.cache.lock().await.insert(url.to_owned(), body);
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> DataSourceResult<T> {
        let cached = self.cache.lock().await.get(url).cloned();
        let body = match cached {
            Some(body) => {
                debug!(url, "cache hit");
                body
            }
            None => {
                let body = self.fetch(url).await?;
                self.cache.lock().await.insert(url.to_owned(), body.clone());
                body
            }
        };

        serde_json::from_value(body).map_err(|source| DataSourceError::Decode {
            url: url.to_owned(),
            source,
        })
    }

    async fn fetch(&self, url: &str) -> DataSourceResult<Value> {
        debug!(url, "GET");
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| DataSourceError::Transport {
                url: url.to_owned(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(url, status = status.as_u16(), "request rejected");
            return Err(DataSourceError::Status {
                url: url.to_owned(),
                status: status.as_u16(),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| DataSourceError::Transport {
                url: url.to_owned(),
                message: e.to_string(),
            })?;

        serde_json::from_slice(&bytes).map_err(|source| DataSourceError::Decode {
            url: url.to_owned(),
            source,
        })
    }
}

#[async_trait]
impl DataSource for PokeApiClient {
    async fn creature(&self, name_or_id: &str) -> DataSourceResult<CreatureDetail> {
        self.get_json(&self.resource_url("pokemon", name_or_id)).await
    }

    async fn species(&self, name_or_id: &str) -> DataSourceResult<SpeciesRecord> {
        self.get_json(&self.resource_url("pokemon-species", name_or_id))
            .await
    }

    async fn species_by_url(&self, url: &str) -> DataSourceResult<SpeciesRecord> {
        if url.trim().is_empty() {
            return Err(DataSourceError::MissingReference("species url".to_owned()));
        }
        self.get_json(url).await
    }

    async fn evolution_chain_by_url(&self, url: &str) -> DataSourceResult<EvolutionChainRecord> {
        if url.trim().is_empty() {
            return Err(DataSourceError::MissingReference(
                "evolution chain url".to_owned(),
            ));
        }
        self.get_json(url).await
    }

    async fn type_member_names(
        &self,
        type_name: &str,
        cap: usize,
    ) -> DataSourceResult<Vec<String>> {
        let record: TypeRecord = self.get_json(&self.resource_url("type", type_name)).await?;
        Ok(record.member_names(cap))
    }

    async fn creature_names(&self) -> DataSourceResult<Vec<String>> {
        let url = format!("{}/pokemon?limit=100000&offset=0", self.base_url);
        let page: ListPage = self.get_json(&url).await?;
        Ok(page
            .results
            .into_iter()
            .filter(|entry| entry.is_named())
            .map(|entry| entry.name)
            .collect())
    }
}
