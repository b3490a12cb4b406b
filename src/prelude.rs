//! Prelude module for convenient imports.
//!
//! ```rust,ignore
//! use model_upgrade::prelude::*;
//! ```

pub use crate::chain::{ChainBuilder, ChainId, ChainResolver, Converter, UpgradePath};
pub use crate::config::{ConverterConfig, NameMatching};
pub use crate::errors::{UpgradeError, UpgradeResult};
pub use crate::record::RecordEnvelope;
pub use crate::registry::VersionRegistry;
#[cfg(feature = "bincode")]
pub use crate::serializers::BincodeSerializer;
#[cfg(feature = "json")]
pub use crate::serializers::JsonSerializer;
pub use crate::store::RecordConverter;
pub use crate::traits::convert::ModelSerializer;
pub use crate::traits::migration::{ModelVersion, VersionStoreModel, VersionTag, VersionedModel};
