//! Stable string codes for errors that cross a process boundary.

pub const FETCH_FAILED: &str = "FETCH_FAILED";
pub const HTTP_STATUS: &str = "HTTP_STATUS";
pub const GRAMMAR_UNAVAILABLE: &str = "GRAMMAR_UNAVAILABLE";
pub const PARSE_FAILED: &str = "PARSE_FAILED";
pub const IO_ERROR: &str = "IO_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const CONFIG_PARSE_ERROR: &str = "CONFIG_PARSE_ERROR";
pub const STORE_ERROR: &str = "STORE_ERROR";
pub const STORE_READ_ONLY: &str = "STORE_READ_ONLY";

/// Implemented by every error enum in the workspace.
pub trait ProptypeErrorCode {
    fn error_code(&self) -> &'static str;
}
