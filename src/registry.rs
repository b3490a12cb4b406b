//! Lookup from persisted version names to concrete version types.
//!
//! Populated explicitly at startup. An envelope's version tag is matched
//! against the registered names and its payload decoded as the matching type.

use log::debug;
use serde::de::DeserializeOwned;
use strum::IntoEnumIterator;

use crate::config::NameMatching;
use crate::errors::{UpgradeError, UpgradeResult};
use crate::traits::convert::ModelSerializer;
use crate::traits::migration::{ModelVersion, VersionTag, VersionedModel};

type Decoder<F, S> = fn(&S, &str) -> Result<F, <S as ModelSerializer>::Error>;

struct RegistryEntry<F: VersionedModel, S: ModelSerializer> {
    version: F::Version,
    decode: Decoder<F, S>,
}

fn decode_as<F, S, V>(serializer: &S, data: &str) -> Result<F, S::Error>
where
    F: VersionedModel,
    S: ModelSerializer,
    V: ModelVersion<F> + DeserializeOwned,
{
    serializer.deserialize::<V>(data).map(Into::into)
}

/// Version names known to a [`RecordConverter`](crate::store::RecordConverter).
///
/// Names must be unique ignoring case, so the registry resolves the same way
/// under every [`NameMatching`] rule.
pub struct VersionRegistry<F: VersionedModel, S: ModelSerializer> {
    entries: Vec<RegistryEntry<F, S>>,
}

impl<F: VersionedModel, S: ModelSerializer> Default for VersionRegistry<F, S> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<F: VersionedModel, S: ModelSerializer> VersionRegistry<F, S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `V` under its version name.
    pub fn with<V>(mut self) -> UpgradeResult<Self>
    where
        V: ModelVersion<F> + DeserializeOwned,
    {
        self.register::<V>()?;
        Ok(self)
    }

    pub fn register<V>(&mut self) -> UpgradeResult<()>
    where
        V: ModelVersion<F> + DeserializeOwned,
    {
        let name = V::VERSION.name();
        let taken = |entry: &&RegistryEntry<F, S>| {
            entry.version == V::VERSION
                || NameMatching::CaseInsensitive.matches(entry.version.name(), name)
        };
        if let Some(existing) = self.entries.iter().find(taken) {
            return Err(UpgradeError::InvalidArgument(format!(
                "version name \"{name}\" is already registered as \"{}\"",
                existing.version.name()
            )));
        }

        debug!("VersionRegistry: Registered {name}");
        self.entries.push(RegistryEntry {
            version: V::VERSION,
            decode: decode_as::<F, S, V>,
        });
        Ok(())
    }

    /// Version registered under `name`.
    pub fn resolve(&self, name: &str, matching: NameMatching) -> Option<F::Version> {
        self.entry(name, matching).map(|entry| entry.version)
    }

    /// Decodes `payload` as the version registered under `name`.
    pub fn decode(
        &self,
        serializer: &S,
        name: &str,
        payload: &str,
        matching: NameMatching,
    ) -> UpgradeResult<F> {
        let entry = self
            .entry(name, matching)
            .ok_or_else(|| UpgradeError::UnknownVersionType(name.to_string()))?;
        (entry.decode)(serializer, payload).map_err(UpgradeError::decode)
    }

    pub fn contains(&self, version: F::Version) -> bool {
        self.entries.iter().any(|entry| entry.version == version)
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.entries.iter().map(|entry| entry.version.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Versions of the family that have no decoder registered.
    pub fn missing(&self) -> Vec<F::Version>
    where
        F::Version: IntoEnumIterator,
    {
        <F::Version as IntoEnumIterator>::iter()
            .filter(|version| !self.contains(*version))
            .collect()
    }

    fn entry(&self, name: &str, matching: NameMatching) -> Option<&RegistryEntry<F, S>> {
        self.entries
            .iter()
            .find(|entry| matching.matches(entry.version.name(), name))
    }
}

impl<F: VersionedModel, S: ModelSerializer> std::fmt::Debug for VersionRegistry<F, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VersionRegistry")
            .field("names", &self.names())
            .finish()
    }
}
