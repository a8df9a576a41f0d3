//! Schema extractor configuration.

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Upstream file holding the modifier declarations.
pub const DEFAULT_SOURCE_URL: &str =
    "https://raw.githubusercontent.com/kolmafia/kolmafia/main/src/net/sourceforge/kolmafia/Modifiers.java";

/// Where the generated table lands, relative to the workspace root.
pub const DEFAULT_OUTPUT_PATH: &str = "crates/proptype-access/src/schema/generated.rs";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ExtractConfig {
    /// Source file URL. Default: the upstream `Modifiers.java`.
    pub source_url: Option<String>,
    /// Output file for the generated table.
    pub output_path: Option<String>,
    /// HTTP timeout in seconds. Default: 30.
    pub timeout_secs: Option<u64>,
    /// User-Agent header. Default: `proptype-extract/<version>`.
    pub user_agent: Option<String>,
}

impl ExtractConfig {
    pub fn effective_source_url(&self) -> &str {
        self.source_url.as_deref().unwrap_or(DEFAULT_SOURCE_URL)
    }

    pub fn effective_output_path(&self) -> &str {
        self.output_path.as_deref().unwrap_or(DEFAULT_OUTPUT_PATH)
    }

    pub fn effective_timeout_secs(&self) -> u64 {
        self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)
    }

    pub fn effective_user_agent(&self) -> String {
        self.user_agent
            .clone()
            .unwrap_or_else(|| format!("proptype-extract/{}", env!("CARGO_PKG_VERSION")))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.effective_source_url();
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            return Err(ConfigError::Invalid {
                field: "extract.source_url".to_string(),
                message: format!("expected an http(s) URL, got {url:?}"),
            });
        }
        if self.effective_timeout_secs() == 0 {
            return Err(ConfigError::Invalid {
                field: "extract.timeout_secs".to_string(),
                message: "timeout must be at least one second".to_string(),
            });
        }
        Ok(())
    }
}
