//! Schema extractor errors. Every variant aborts the run.

use super::error_code::{self, ProptypeErrorCode};
use super::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("failed to fetch {url}: {message}")]
    Fetch { url: String, message: String },

    #[error("fetching {url} returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("Java grammar could not be loaded: {message}")]
    Grammar { message: String },

    #[error("source failed to parse at line {line}, column {column}")]
    Parse { line: usize, column: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl ProptypeErrorCode for ExtractError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Fetch { .. } => error_code::FETCH_FAILED,
            Self::HttpStatus { .. } => error_code::HTTP_STATUS,
            Self::Grammar { .. } => error_code::GRAMMAR_UNAVAILABLE,
            Self::Parse { .. } => error_code::PARSE_FAILED,
            Self::Io(_) => error_code::IO_ERROR,
            Self::Config(e) => e.error_code(),
        }
    }
}

pub type ExtractResult<T> = Result<T, ExtractError>;
