//! Typed accessor configuration.

use serde::{Deserialize, Serialize};

/// Extra property names merged into the builtin schema table.
///
/// Lets a host classify properties the generated table does not know about
/// without regenerating it.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct AccessConfig {
    pub boolean: Vec<String>,
    pub numeric: Vec<String>,
    pub monster: Vec<String>,
    pub location: Vec<String>,
}

impl AccessConfig {
    pub fn is_empty(&self) -> bool {
        self.boolean.is_empty()
            && self.numeric.is_empty()
            && self.monster.is_empty()
            && self.location.is_empty()
    }
}
