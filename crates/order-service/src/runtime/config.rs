//! # Configuration
//!
//! Runtime settings come from the environment:
//!
//! | Variable | Meaning | Default |
//! |----------|---------|---------|
//! | `ORDER_SERVICE_BUFFER_SIZE` | Actor mailbox capacity | `32` |
//! | `ORDER_SERVICE_CATALOG` | Path to a JSON product seed file | none |
//!
//! The seed file is an array of products. Only `id`, `title`, `category` and `price` are
//! read; other fields are ignored.
//!
//! ```json
//! [
//!   { "id": 1, "title": "Skyforge Hammer", "category": "tools", "price": 549, "rating": 4.7 }
//! ]
//! ```

use crate::model::Product;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const BUFFER_SIZE_VAR: &str = "ORDER_SERVICE_BUFFER_SIZE";
pub const CATALOG_VAR: &str = "ORDER_SERVICE_CATALOG";

const DEFAULT_BUFFER_SIZE: usize = 32;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} must be a positive integer, got {value:?}")]
    InvalidBufferSize { var: &'static str, value: String },

    #[error("Could not read catalog {}: {source}", .path.display())]
    CatalogRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not parse catalog {}: {source}", .path.display())]
    CatalogParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemConfig {
    /// Capacity of every actor's channel.
    pub buffer_size: usize,
    /// Products to load into the catalog at startup.
    pub catalog_path: Option<PathBuf>,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_SIZE,
            catalog_path: None,
        }
    }
}

impl SystemConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup(BUFFER_SIZE_VAR) {
            config.buffer_size = match value.trim().parse::<usize>() {
                Ok(size) if size > 0 => size,
                _ => {
                    return Err(ConfigError::InvalidBufferSize {
                        var: BUFFER_SIZE_VAR,
                        value,
                    })
                }
            };
        }

        config.catalog_path = lookup(CATALOG_VAR)
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        Ok(config)
    }
}

/// Reads a product seed file.
pub fn load_catalog(path: &Path) -> Result<Vec<Product>, ConfigError> {
    let json = std::fs::read_to_string(path).map_err(|source| ConfigError::CatalogRead {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&json).map_err(|source| ConfigError::CatalogParse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProductId;
    use rust_decimal_macros::dec;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| vars.get(var).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = SystemConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, SystemConfig::default());
        assert_eq!(config.buffer_size, 32);
    }

    #[test]
    fn test_reads_environment() {
        let config = SystemConfig::from_lookup(lookup(&[
            (BUFFER_SIZE_VAR, "128"),
            (CATALOG_VAR, "/srv/products.json"),
        ]))
        .unwrap();

        assert_eq!(config.buffer_size, 128);
        assert_eq!(config.catalog_path, Some(PathBuf::from("/srv/products.json")));
    }

    #[test]
    fn test_rejects_bad_buffer_size() {
        for bad in ["0", "-4", "lots"] {
            let result = SystemConfig::from_lookup(lookup(&[(BUFFER_SIZE_VAR, bad)]));
            assert!(matches!(result, Err(ConfigError::InvalidBufferSize { .. })), "{bad}");
        }
    }

    #[test]
    fn test_catalog_seed_format() {
        let json = r#"[
            {"id": 1, "category": "tools", "title": "Skyforge Hammer",
             "description": "Heavy.", "price": 549, "rating": 4.69, "brand": "Brokkr"},
            {"id": 2, "category": "armor", "title": "Round Shield", "price": "12.96"}
        ]"#;

        let products: Vec<Product> = serde_json::from_str(json).unwrap();

        assert_eq!(products.len(), 2);
        assert_eq!(products[0].id, Some(ProductId(1)));
        assert_eq!(products[0].price, dec!(549));
        assert_eq!(products[1].price, dec!(12.96));
    }

    #[test]
    fn test_missing_catalog_file() {
        let result = load_catalog(Path::new("/nonexistent/products.json"));
        assert!(matches!(result, Err(ConfigError::CatalogRead { .. })));
    }
}
