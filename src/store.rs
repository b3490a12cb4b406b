//! Conversion between stored envelopes and the latest model version.
//!
//! [`RecordConverter`] is the store-facing half of the crate: it decodes an
//! envelope written under any registered version, runs it through the upgrade
//! chain and hands back the latest version, or wraps the latest version into a
//! fresh envelope for saving.

use std::marker::PhantomData;
use std::sync::Arc;

use log::debug;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::chain::{ChainId, ChainResolver};
use crate::config::ConverterConfig;
use crate::errors::{UpgradeError, UpgradeResult};
use crate::record::RecordEnvelope;
use crate::registry::VersionRegistry;
use crate::traits::convert::ModelSerializer;
use crate::traits::migration::{VersionStoreModel, VersionTag, VersionedModel};

/// Converts between [`RecordEnvelope`]s of any registered version and `L`, the
/// latest version of family `F`.
///
/// # Example
///
/// ```ignore
/// let converter = RecordConverter::<Project, Version3, _>::new(
///     JsonSerializer::new(),
///     Arc::new(resolver),
///     head,
///     VersionRegistry::new().with::<Version1>()?.with::<Version2>()?,
///     ConverterConfig::default(),
/// )?;
///
/// // Saved data, written by an older release.
/// let v3 = converter.parse_record(&stored)?;
///
/// // Back to an envelope for saving.
/// let record = converter.parse_model(Some(v3.into()))?;
/// ```
pub struct RecordConverter<F, L, S>
where
    F: VersionedModel,
    S: ModelSerializer,
{
    serializer: S,
    resolver: Arc<ChainResolver<F>>,
    head: ChainId,
    registry: VersionRegistry<F, S>,
    config: ConverterConfig,
    _latest: PhantomData<fn() -> L>,
}

impl<F, L, S> RecordConverter<F, L, S>
where
    F: VersionedModel,
    L: VersionStoreModel<F> + Serialize + DeserializeOwned,
    S: ModelSerializer,
{
    /// Creates a converter upgrading through `head`.
    ///
    /// `head` must target `L`, otherwise this fails with
    /// [`UpgradeError::IncompatibleChain`]. `L` is added to the registry when
    /// it is not registered yet.
    pub fn new(
        serializer: S,
        resolver: Arc<ChainResolver<F>>,
        head: ChainId,
        mut registry: VersionRegistry<F, S>,
        config: ConverterConfig,
    ) -> UpgradeResult<Self> {
        let node = resolver.node(head)?;
        let target = node.converter().target();
        if target != L::VERSION {
            return Err(UpgradeError::IncompatibleChain {
                converter: node.converter().name().to_string(),
                expected: L::VERSION.name().to_string(),
                found: target.name().to_string(),
            });
        }

        if !registry.contains(L::VERSION) {
            registry.register::<L>()?;
        }

        debug!(
            "RecordConverter: Created for {} with {} registered versions",
            L::VERSION.name(),
            registry.len()
        );

        Ok(Self {
            serializer,
            resolver,
            head,
            registry,
            config,
            _latest: PhantomData,
        })
    }

    /// Upgrades `model` to the latest version. A model already at the latest
    /// version is returned as is.
    pub fn upgrade(&self, model: F) -> UpgradeResult<L> {
        self.resolver.upgrade_to::<L>(self.head, model)
    }

    /// Decodes a stored envelope and upgrades it to the latest version.
    pub fn parse_record(&self, record: &RecordEnvelope) -> UpgradeResult<L> {
        let tag = record.version_tag.as_str();
        if tag.trim().is_empty() {
            return Err(UpgradeError::InvalidArgument(format!(
                "record \"{}\" has no version tag",
                record.id
            )));
        }

        debug!("RecordConverter: Parsing record {} from {tag}", record.id);
        let model = self
            .registry
            .decode(&self.serializer, tag, &record.payload, self.config.name_matching)?;
        self.upgrade(model)
    }

    /// Upgrades a stored envelope and re-encodes it at the latest version.
    pub fn upgrade_record(&self, record: &RecordEnvelope) -> UpgradeResult<RecordEnvelope> {
        let latest = self.parse_record(record)?;
        let mut upgraded = self.to_record(&latest)?;
        if self.config.preserve_record_id {
            upgraded.id = record.id.clone();
        }
        Ok(upgraded)
    }

    /// Upgrades `model` and wraps it into an envelope for saving.
    ///
    /// `None` is passed through as `None`.
    pub fn parse_model(&self, model: Option<F>) -> UpgradeResult<Option<RecordEnvelope>> {
        model
            .map(|model| {
                let latest = self.upgrade(model)?;
                self.to_record(&latest)
            })
            .transpose()
    }

    /// Wraps the latest version into an envelope.
    pub fn to_record(&self, latest: &L) -> UpgradeResult<RecordEnvelope> {
        let id = latest.model_id();
        if self.config.require_id && id.is_empty() {
            return Err(UpgradeError::InvalidArgument(format!(
                "{} has an empty id",
                L::VERSION.name()
            )));
        }
        let payload = self
            .serializer
            .serialize(latest)
            .map_err(UpgradeError::encode)?;
        Ok(RecordEnvelope::new(id, payload, latest.model_name()))
    }

    /// Wraps any storable version without upgrading it.
    pub fn envelope<V>(&self, model: &V) -> UpgradeResult<RecordEnvelope>
    where
        V: VersionStoreModel<F> + Serialize,
    {
        RecordEnvelope::from_version::<F, V, S>(model, &self.serializer)
    }

    pub fn serializer(&self) -> &S {
        &self.serializer
    }

    pub fn resolver(&self) -> &Arc<ChainResolver<F>> {
        &self.resolver
    }

    pub fn head(&self) -> ChainId {
        self.head
    }

    pub fn registry(&self) -> &VersionRegistry<F, S> {
        &self.registry
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }
}
