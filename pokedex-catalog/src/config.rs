//! Catalog configuration.
//!
//! One flag selects the deployment environment, which decides how much of
//! the reference dataset is fetched: a small fixed range in development,
//! the full range in production. No other behavior depends on the
//! environment.

use pokedex_types::ApiId;
use serde::{Deserialize, Serialize};

/// Environment variable selecting the deployment environment.
pub const ENV_VAR: &str = "POKEDEX_ENV";

/// Catalog size fetched in development.
pub const DEV_CATALOG_SIZE: u32 = 10;

/// Catalog size fetched in production (the full first-generation dex).
pub const PROD_CATALOG_SIZE: u32 = 151;

/// Deployment environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    /// Reads the environment from `POKEDEX_ENV`; anything but
    /// `production` is development.
    pub fn from_env() -> Self {
        match std::env::var(ENV_VAR) {
            Ok(value) if value.eq_ignore_ascii_case("production") => Self::Production,
            _ => Self::Development,
        }
    }

    /// How many entities this environment fetches.
    #[must_use]
    pub const fn catalog_size(&self) -> u32 {
        match self {
            Self::Development => DEV_CATALOG_SIZE,
            Self::Production => PROD_CATALOG_SIZE,
        }
    }
}

/// Configuration for the reference-dataset loader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Deployment environment, deciding the ID range size.
    pub environment: Environment,
    /// Base URL of the upstream catalog API.
    pub api_base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            api_base_url: "https://pokeapi.co/api/v2".to_string(),
            timeout_secs: 30,
        }
    }
}

impl CatalogConfig {
    /// Default config with the environment read from `POKEDEX_ENV`.
    pub fn from_env() -> Self {
        Self {
            environment: Environment::from_env(),
            ..Self::default()
        }
    }

    /// The deterministic ID sequence to fetch: `1..=N` for the
    /// environment's catalog size.
    pub fn ids_to_fetch(&self) -> Vec<ApiId> {
        (1..=self.environment.catalog_size()).map(ApiId::new).collect()
    }
}
