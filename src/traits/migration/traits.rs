//! Core traits describing a versioned model family.

use std::fmt::Debug;
use std::hash::Hash;

/// Identifier of one schema version inside a model family.
///
/// Equality is by version identity. The `&'static str` conversion yields the
/// human-readable name that survives serialization (the envelope's version tag).
///
/// The tag is normally the discriminant enum of the family, generated by
/// `strum::EnumDiscriminants` with `IntoStaticStr` derived on it:
///
/// ```
/// use model_upgrade::traits::migration::VersionTag;
/// use strum::{EnumDiscriminants, IntoStaticStr};
///
/// #[derive(Debug, Clone, EnumDiscriminants)]
/// #[strum_discriminants(name(ProjectVersion), derive(Hash, IntoStaticStr))]
/// enum Project {
///     Version1(String),
///     Version2(u64),
/// }
///
/// assert_eq!(ProjectVersion::Version2.name(), "Version2");
/// ```
pub trait VersionTag: Copy + Eq + Hash + Debug + Send + Sync + 'static {
    /// Human-readable name of this version.
    fn name(self) -> &'static str;
}

impl<T> VersionTag for T
where
    T: Copy + Eq + Hash + Debug + Send + Sync + 'static + Into<&'static str>,
{
    fn name(self) -> &'static str {
        self.into()
    }
}

/// A value tagged with the schema version it was written under.
///
/// Implemented by the family enum that holds one variant per version. Dispatch
/// in the upgrade chain switches on [`VersionedModel::version`], never on
/// runtime type identity.
pub trait VersionedModel: Sized + Send + 'static {
    /// Tag type enumerating every version of the family.
    type Version: VersionTag;

    /// The version this value is currently at.
    fn version(&self) -> Self::Version;

    /// Name of the version this value is currently at.
    fn version_name(&self) -> &'static str {
        self.version().name()
    }
}

/// A concrete version struct of a model family.
///
/// Deriving `derive_more::From` and `derive_more::TryInto` on the family enum
/// provides both conversions.
pub trait ModelVersion<F: VersionedModel>: Into<F> + TryFrom<F> + Sized {
    /// Tag of this version inside the family.
    const VERSION: F::Version;
}

/// A version that can be persisted on its own.
///
/// Required of the latest version of a family, and of any version wrapped in a
/// [`RecordEnvelope`](crate::record::RecordEnvelope) directly.
pub trait VersionStoreModel<F: VersionedModel>: ModelVersion<F> {
    /// Identifier stored alongside the serialized payload.
    fn model_id(&self) -> String;

    /// Name stored as the envelope's version tag.
    fn model_name(&self) -> &'static str {
        Self::VERSION.name()
    }
}
