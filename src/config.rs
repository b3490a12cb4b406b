//! Configuration for record conversion.
//!
//! Built with `typed-builder`, like every other configuration in this crate.

use strum::{Display, EnumString};
use typed_builder::TypedBuilder;

/// How an envelope's version tag is matched against registered version names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
pub enum NameMatching {
    /// `"version1"` matches `Version1`.
    #[default]
    CaseInsensitive,
    /// Names must be identical.
    Exact,
}

impl NameMatching {
    pub fn matches(self, registered: &str, requested: &str) -> bool {
        match self {
            NameMatching::CaseInsensitive => registered.to_lowercase() == requested.to_lowercase(),
            NameMatching::Exact => registered == requested,
        }
    }
}

/// Configuration for a [`RecordConverter`](crate::store::RecordConverter).
///
/// # Examples
///
/// ```
/// use model_upgrade::config::{ConverterConfig, NameMatching};
///
/// // Defaults
/// let config = ConverterConfig::builder().build();
/// assert_eq!(config.name_matching, NameMatching::CaseInsensitive);
/// assert!(config.preserve_record_id);
///
/// // Strict tags, ids required
/// let config = ConverterConfig::builder()
///     .name_matching(NameMatching::Exact)
///     .require_id(true)
///     .build();
/// assert!(config.require_id);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, TypedBuilder)]
#[builder(doc)]
pub struct ConverterConfig {
    /// Matching rule for envelope version tags
    #[builder(default)]
    pub name_matching: NameMatching,

    /// Reject latest models whose id is empty when building an envelope
    #[builder(default = false)]
    pub require_id: bool,

    /// Keep the incoming envelope's id when re-encoding an upgraded record
    #[builder(default = true)]
    pub preserve_record_id: bool,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}
