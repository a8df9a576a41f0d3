//! Errors surfaced by a `PropertyStore` backend.

use super::error_code::{self, ProptypeErrorCode};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("storage backend error: {message}")]
    Backend { message: String },

    #[error("property store is read-only (writing {key})")]
    ReadOnly { key: String },
}

impl ProptypeErrorCode for StoreError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Backend { .. } => error_code::STORE_ERROR,
            Self::ReadOnly { .. } => error_code::STORE_READ_ONLY,
        }
    }
}
