//! Domain types and configuration for the weekly-ad workspace.
//!
//! Holds everything the request layer and CLI share: the normalized [`Ad`]
//! entity, the [`Basket`], week-key resolution, the store roster, and
//! application configuration loaded from environment variables.

use thiserror::Error;

pub mod ad;
pub mod app_config;
pub mod basket;
pub mod config;
pub mod stores;
pub mod week;

pub use ad::{Ad, Price};
pub use app_config::{AppConfig, Environment};
pub use basket::Basket;
pub use config::{load_app_config, load_app_config_from_env};
pub use stores::{load_stores, StoreConfig, StoresFile};

/// Errors raised while loading configuration or the store roster.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment variable was set to a value that could not be parsed.
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    /// The stores file could not be read from disk.
    #[error("failed to read stores file {path}: {source}")]
    StoresFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The stores file was not valid YAML of the expected shape.
    #[error("failed to parse stores file: {0}")]
    StoresFileParse(#[from] serde_yaml::Error),

    /// The stores file parsed but failed validation.
    #[error("invalid stores config: {0}")]
    Validation(String),
}
