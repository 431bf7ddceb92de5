//! Error types for the engine crate.

use data_loader::DataLoadError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    /// The candidate payload could not be loaded; fatal for the session
    #[error("Could not load candidate data: {0}")]
    Load(#[from] DataLoadError),

    /// A configuration value is out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to read config file {path}: {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    ConfigParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Writing the CSV export failed
    #[error("Failed to write export {path}: {source}")]
    Export {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, EngineError>;
