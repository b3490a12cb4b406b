//! Sample models and wiring for `model_upgrade`.
//!
//! Three releases of a project record, an upgrade chain from the oldest to the
//! newest, and a JSON-backed [`RecordConverter`] over it.

pub mod models;

use std::sync::Arc;

use log::debug;
use model_upgrade::prelude::*;

use models::project::{
    Project, Version1, Version2, Version3, version1_to_version2, version2_to_version3,
};

pub type ProjectConverter = RecordConverter<Project, Version3, JsonSerializer>;

/// Version1 -> Version2 -> Version3, registered oldest first.
///
/// Returns the frozen resolver and the chain producing `Version3`.
pub fn project_chain() -> UpgradeResult<(ChainResolver<Project>, ChainId)> {
    let mut builder = ChainBuilder::<Project>::new();
    let v1 = builder.chain(Converter::new(version1_to_version2)?, &[])?;
    let v2 = builder.chain(Converter::new(version2_to_version3)?, &[v1])?;
    debug!("Sample: Project chain ready with {} converters", builder.len());
    Ok((builder.build(), v2))
}

/// Converter reading every project release from JSON envelopes.
pub fn project_converter(config: ConverterConfig) -> UpgradeResult<ProjectConverter> {
    let (resolver, head) = project_chain()?;
    let registry = VersionRegistry::new()
        .with::<Version1>()?
        .with::<Version2>()?;
    RecordConverter::new(JsonSerializer::pretty(), Arc::new(resolver), head, registry, config)
}
