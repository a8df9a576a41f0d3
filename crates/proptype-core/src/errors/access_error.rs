//! Typed accessor errors.
//!
//! Absence (an empty raw value, or a reference to the registry's "none"
//! object) and failed numeric coercion are normal results, not errors.
//! Only the storage engine can make an access fail.

use super::error_code::ProptypeErrorCode;
use super::StoreError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccessError {
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

impl ProptypeErrorCode for AccessError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Store(e) => e.error_code(),
        }
    }
}

pub type AccessResult<T> = Result<T, AccessError>;
