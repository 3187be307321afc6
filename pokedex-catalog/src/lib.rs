//! Reference dataset for the pokedex core.
//!
//! The catalog is a fixed, ordered list of entities fetched once from the
//! upstream API:
//! - **Config**: one environment flag decides the ID range (small in
//!   development, the full dataset in production)
//! - **Loader**: HTTP fetch of the deterministic ID range
//! - **Filter**: substring search over entity names
//! - **Merge**: O(n) join of the live collection onto the reference
//!   dataset by stable key

mod config;
mod error;
mod filter;
mod loader;
mod merge;

pub use config::{
    CatalogConfig, Environment, DEV_CATALOG_SIZE, ENV_VAR, PROD_CATALOG_SIZE,
};
pub use error::{CatalogError, CatalogResult};
pub use filter::filter_by_name;
pub use loader::CatalogLoader;
pub use merge::{annotate, CollectedPokemon};
