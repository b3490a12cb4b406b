use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::traits::convert::ModelSerializer;

/// JSON payloads through `serde_json`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JsonSerializer {
    pretty: bool,
}

impl JsonSerializer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Indented output. Decoding accepts both forms.
    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

impl ModelSerializer for JsonSerializer {
    type Error = serde_json::Error;

    fn serialize<V: Serialize>(&self, model: &V) -> Result<String, Self::Error> {
        if self.pretty {
            serde_json::to_string_pretty(model)
        } else {
            serde_json::to_string(model)
        }
    }

    fn deserialize<V: DeserializeOwned>(&self, data: &str) -> Result<V, Self::Error> {
        serde_json::from_str(data)
    }
}
