//! The store roster: which grocery chains the backend is scraped for.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// One store in the roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Display name, e.g. `"Tom Thumb"`.
    pub name: String,
    pub notes: Option<String>,
}

impl StoreConfig {
    /// The identifier sent to the backend as the `storename` query parameter.
    ///
    /// The backend keys its ad folders by the lowercased display name, so the
    /// slug is exactly that (spaces included; the request layer URL-encodes).
    #[must_use]
    pub fn slug(&self) -> String {
        self.name.to_lowercase()
    }
}

#[derive(Debug, Deserialize)]
pub struct StoresFile {
    pub stores: Vec<StoreConfig>,
}

/// Load and validate the store roster from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails
/// validation.
pub fn load_stores(path: &Path) -> Result<StoresFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::StoresFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let stores_file: StoresFile =
        serde_yaml::from_str(&content).map_err(ConfigError::StoresFileParse)?;

    validate_stores(&stores_file)?;

    Ok(stores_file)
}

fn validate_stores(stores_file: &StoresFile) -> Result<(), ConfigError> {
    if stores_file.stores.is_empty() {
        return Err(ConfigError::Validation(
            "store roster must contain at least one store".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for store in &stores_file.stores {
        if store.name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "store name must be non-empty".to_string(),
            ));
        }

        let slug = store.slug();
        if slug == "all" {
            // "All" is the pseudo-selector meaning "union over the roster".
            return Err(ConfigError::Validation(format!(
                "store name '{}' is reserved for the roster-wide selector",
                store.name
            )));
        }

        if !seen.insert(slug.clone()) {
            return Err(ConfigError::Validation(format!(
                "duplicate store: '{}' (slug '{slug}')",
                store.name
            )));
        }
    }

    Ok(())
}
