//! Config loading errors

use thiserror::Error;

/// Errors when loading a config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not readable at {path}: {source}")]
    FileNotFound {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),
}
