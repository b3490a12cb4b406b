//! # Model Upgrade
//!
//! Upgrades persisted models written under an old schema version to the
//! current one, through any number of intermediate versions.
//!
//! ## Features
//!
//! - **Typed Converters**: one converter per version transition, written
//!   against the concrete version structs
//! - **Shortest Paths**: jump converters that skip versions are preferred
//!   automatically, with deterministic tie-breaking by registration order
//! - **Fail Fast**: wiring mistakes are reported when the graph is built
//! - **Envelopes**: id + payload + version tag records, decoded through a
//!   pluggable serializer (JSON and bincode included)
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use model_upgrade::prelude::*;
//!
//! // Register converters from the oldest version to the newest
//! let mut builder = ChainBuilder::<Project>::new();
//! let v1 = builder.chain(Converter::new(|m: Version1| Version2::from(m))?, &[])?;
//! let v2 = builder.chain(Converter::new(|m: Version2| Version3::from(m))?, &[v1])?;
//! let resolver = Arc::new(builder.build());
//!
//! // Parse stored records into the latest version
//! let converter = RecordConverter::<Project, Version3, _>::new(
//!     JsonSerializer::new(),
//!     resolver,
//!     v2,
//!     VersionRegistry::new().with::<Version1>()?.with::<Version2>()?,
//!     ConverterConfig::default(),
//! )?;
//! let latest: Version3 = converter.parse_record(&stored)?;
//! ```

pub mod chain;
pub mod config;
pub mod errors;
pub mod prelude;
pub mod record;
pub mod registry;
pub mod serializers;
pub mod store;
pub mod traits;
