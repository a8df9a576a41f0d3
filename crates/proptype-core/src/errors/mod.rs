//! Error types for every proptype subsystem.

pub mod access_error;
pub mod config_error;
pub mod error_code;
pub mod extract_error;
pub mod store_error;

pub use access_error::{AccessError, AccessResult};
pub use config_error::ConfigError;
pub use error_code::ProptypeErrorCode;
pub use extract_error::{ExtractError, ExtractResult};
pub use store_error::StoreError;
