//! Reference-dataset loader.
//!
//! Fetches the fixed catalog from the upstream API once, at build or
//! startup time. The result is immutable and shared read-only with the
//! rest of the application.

use crate::config::CatalogConfig;
use crate::error::{CatalogError, CatalogResult};
use pokedex_types::{ApiId, Pokemon};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info};

/// Upstream entity shape; only the fields the catalog keeps.
#[derive(Debug, Deserialize)]
struct ApiPokemon {
    id: u32,
    name: String,
}

/// Fetches catalog entities over HTTP.
pub struct CatalogLoader {
    config: CatalogConfig,
    client: Client,
}

impl CatalogLoader {
    /// Creates a loader for the given config.
    pub fn new(config: CatalogConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("failed to create HTTP client");

        Self { config, client }
    }

    /// Fetches one entity by its upstream key.
    pub async fn fetch_entity(&self, id: ApiId) -> CatalogResult<Pokemon> {
        let url = format!("{}/pokemon/{}", self.config.api_base_url, id);
        debug!(%id, "fetching catalog entity");

        let response = self.client.get(&url).send().await?;
        match response.status() {
            StatusCode::NOT_FOUND => Err(CatalogError::MissingEntity(id)),
            status if !status.is_success() => Err(CatalogError::Status {
                id,
                status: status.as_u16(),
            }),
            _ => {
                let entity: ApiPokemon = response.json().await?;
                Ok(Pokemon::new(entity.id, entity.name))
            }
        }
    }

    /// Fetches the given entities, preserving the requested order.
    pub async fn fetch_entities(
        &self,
        ids: impl IntoIterator<Item = ApiId>,
    ) -> CatalogResult<Vec<Pokemon>> {
        let mut entities = Vec::new();
        for id in ids {
            entities.push(self.fetch_entity(id).await?);
        }
        info!(count = entities.len(), "reference dataset fetched");
        Ok(entities)
    }

    /// Fetches the environment's full deterministic ID range.
    pub async fn fetch_all(&self) -> CatalogResult<Vec<Pokemon>> {
        self.fetch_entities(self.config.ids_to_fetch()).await
    }
}
