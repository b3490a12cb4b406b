use serde::{Deserialize, Serialize};

use crate::errors::{UpgradeError, UpgradeResult};

/// Exported view of a frozen upgrade graph.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChainSchema {
    pub chains: Vec<ChainSchemaEntry>,
}

impl ChainSchema {
    /// Convert the schema to a TOML string.
    pub fn to_toml(&self) -> UpgradeResult<String> {
        toml::to_string_pretty(self).map_err(UpgradeError::encode)
    }

    pub fn chain(&self, name: &str) -> Option<&ChainSchemaEntry> {
        self.chains.iter().find(|chain| chain.name == name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChainSchemaEntry {
    pub id: usize,
    pub name: String,
    pub source: String,
    pub target: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub routes: Vec<RouteSchema>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RouteSchema {
    pub version: String,
    pub hops: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub via: Option<usize>,
}
