//! Configuration loading errors.

use std::path::PathBuf;

use super::error_code::{self, ProptypeErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("invalid config value for {field}: {message}")]
    Invalid { field: String, message: String },
}

impl ProptypeErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::TomlParse(_) => error_code::CONFIG_PARSE_ERROR,
            _ => error_code::CONFIG_ERROR,
        }
    }
}
