//! CLI configuration resolved from arguments and the environment.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `FOOD_ORDER_CATALOG` - Path to a YAML menu (default: built-in sample menu)
//! - `RUST_LOG` - Log filter (default: `warn`)
//!
//! A `.env` file in the working directory is loaded before either is read.

use std::path::PathBuf;

use food_order_core::{Catalog, CatalogError};
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid catalog {path}: {source}")]
    Catalog {
        path: PathBuf,
        #[source]
        source: CatalogError,
    },
}

/// Front end configuration.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// YAML menu to load instead of the sample menu.
    pub catalog_path: Option<PathBuf>,
}

impl CliConfig {
    #[must_use]
    pub const fn new(catalog_path: Option<PathBuf>) -> Self {
        Self { catalog_path }
    }

    /// Build the menu this session serves.
    ///
    /// # Errors
    ///
    /// Returns an error if a catalog path is configured and the file cannot
    /// be loaded.
    pub fn load_catalog(&self) -> Result<Catalog, ConfigError> {
        match &self.catalog_path {
            Some(path) => Catalog::from_yaml_file(path).map_err(|source| ConfigError::Catalog {
                path: path.clone(),
                source,
            }),
            None => {
                tracing::debug!("No catalog configured, using sample menu");
                Ok(Catalog::sample())
            }
        }
    }
}
