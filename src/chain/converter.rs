//! A single directed edge of the upgrade graph.

use std::fmt;
use std::sync::Arc;

use crate::errors::{UpgradeError, UpgradeResult};
use crate::traits::migration::{ModelVersion, VersionTag, VersionedModel};

/// Erased transform; `Err` carries the version that was rejected.
type Transform<F> =
    Arc<dyn Fn(F) -> Result<F, <F as VersionedModel>::Version> + Send + Sync>;

/// Upgrades one source version of a family to one target version.
///
/// The typed transform is erased at construction so converters of every
/// version pair can live in the same graph.
///
/// ```
/// # use model_upgrade::chain::Converter;
/// # use model_upgrade::traits::migration::{ModelVersion, VersionedModel};
/// # use derive_more::{From, TryInto};
/// # use strum::{EnumDiscriminants, IntoStaticStr};
/// # #[derive(Debug, Clone, PartialEq)] pub struct Version1 { pub uid: String }
/// # #[derive(Debug, Clone, PartialEq)] pub struct Version2 { pub id: String }
/// # #[derive(Debug, Clone, From, TryInto, EnumDiscriminants)]
/// # #[strum_discriminants(name(ProjectVersion), derive(Hash, IntoStaticStr))]
/// # pub enum Project { Version1(Version1), Version2(Version2) }
/// # impl VersionedModel for Project {
/// #     type Version = ProjectVersion;
/// #     fn version(&self) -> ProjectVersion { self.into() }
/// # }
/// # impl ModelVersion<Project> for Version1 { const VERSION: ProjectVersion = ProjectVersion::Version1; }
/// # impl ModelVersion<Project> for Version2 { const VERSION: ProjectVersion = ProjectVersion::Version2; }
/// let converter = Converter::<Project>::new(|v1: Version1| Version2 { id: v1.uid }).unwrap();
/// assert_eq!(converter.name(), "Version1ToVersion2");
///
/// let upgraded = converter.apply(Version1 { uid: "TestV1".into() }.into()).unwrap();
/// assert!(matches!(upgraded, Project::Version2(Version2 { ref id }) if id == "TestV1"));
/// ```
pub struct Converter<F: VersionedModel> {
    name: String,
    source: F::Version,
    target: F::Version,
    transform: Transform<F>,
}

impl<F: VersionedModel> Converter<F> {
    /// Builds a converter from a typed transform.
    ///
    /// Fails with [`UpgradeError::IncompatibleChain`] when the source and
    /// target are the same version; a converter never converts its own target.
    pub fn new<S, T, Func>(transform: Func) -> UpgradeResult<Self>
    where
        S: ModelVersion<F> + 'static,
        T: ModelVersion<F> + 'static,
        Func: Fn(S) -> T + Send + Sync + 'static,
    {
        let source = S::VERSION;
        let target = T::VERSION;
        let name = format!("{}To{}", source.name(), target.name());

        if source == target {
            return Err(UpgradeError::IncompatibleChain {
                converter: name,
                expected: format!("a version other than {}", target.name()),
                found: target.name().to_string(),
            });
        }

        let transform: Transform<F> = Arc::new(move |model: F| {
            let found = model.version();
            S::try_from(model)
                .map(|previous| transform(previous).into())
                .map_err(|_| found)
        });

        Ok(Self {
            name,
            source,
            target,
            transform,
        })
    }

    /// Replaces the generated `"{Source}To{Target}"` name.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn source(&self) -> F::Version {
        self.source
    }

    pub fn target(&self) -> F::Version {
        self.target
    }

    /// Applies the transform to a value already at the source version.
    pub fn apply(&self, model: F) -> UpgradeResult<F> {
        (self.transform)(model).map_err(|found| UpgradeError::ChainIncomplete {
            converter: self.name.clone(),
            expected: self.source.name().to_string(),
            found: found.name().to_string(),
        })
    }
}

impl<F: VersionedModel> Clone for Converter<F> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            source: self.source,
            target: self.target,
            transform: Arc::clone(&self.transform),
        }
    }
}

impl<F: VersionedModel> fmt::Debug for Converter<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Converter")
            .field("name", &self.name)
            .field("source", &self.source)
            .field("target", &self.target)
            .finish_non_exhaustive()
    }
}
