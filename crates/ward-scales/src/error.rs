use std::path::PathBuf;

use thiserror::Error;

use crate::scoring::ValidationError;

#[derive(Debug, Error)]
pub enum ScaleError {
    #[error("unknown scale: {0}")]
    UnknownScale(String),

    #[error("invalid {scale} input: {message}")]
    InvalidInput { scale: String, message: String },

    #[error("input out of range: {0}")]
    OutOfRange(#[from] ValidationError),

    #[error("{scale} value {value} falls outside every interpretation band")]
    Unclassified { scale: String, value: f64 },

    #[error("record holds a '{recorded}' scale, cannot score it as '{requested}'")]
    ScaleMismatch { recorded: String, requested: String },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write config at {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("config is not a JSON object")]
    NotAnObject,

    #[error("config_version {found} is newer than this build supports ({supported})")]
    UnsupportedVersion { found: u64, supported: u32 },
}
