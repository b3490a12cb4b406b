//! The persisted form of a versioned model.

use serde::{Deserialize, Serialize};

use crate::errors::{UpgradeError, UpgradeResult};
use crate::traits::convert::ModelSerializer;
use crate::traits::migration::{VersionStoreModel, VersionedModel};

/// Identifier, serialized payload and version tag of one stored model.
///
/// The payload is opaque to this crate; it is whatever the
/// [`ModelSerializer`] produced. The version tag is the name of the version the
/// payload was written under and decides which type it is decoded as.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "bincode", derive(bincode::Encode, bincode::Decode))]
pub struct RecordEnvelope {
    pub id: String,
    pub payload: String,
    pub version_tag: String,
}

impl RecordEnvelope {
    pub fn new(
        id: impl Into<String>,
        payload: impl Into<String>,
        version_tag: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            payload: payload.into(),
            version_tag: version_tag.into(),
        }
    }

    /// Wraps any storable version, without upgrading it.
    pub fn from_version<F, V, S>(model: &V, serializer: &S) -> UpgradeResult<Self>
    where
        F: VersionedModel,
        V: VersionStoreModel<F> + Serialize,
        S: ModelSerializer,
    {
        let payload = serializer.serialize(model).map_err(UpgradeError::encode)?;
        Ok(Self::new(model.model_id(), payload, model.model_name()))
    }
}

#[cfg(feature = "bincode")]
impl RecordEnvelope {
    /// Encodes the whole envelope with bincode's standard configuration.
    pub fn to_bytes(&self) -> UpgradeResult<Vec<u8>> {
        bincode::encode_to_vec(self, bincode::config::standard()).map_err(UpgradeError::encode)
    }

    pub fn from_bytes(bytes: &[u8]) -> UpgradeResult<Self> {
        let (record, _) = bincode::decode_from_slice(bytes, bincode::config::standard())
            .map_err(UpgradeError::decode)?;
        Ok(record)
    }
}
