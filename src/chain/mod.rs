//! Upgrade chains: converters wired into a graph and resolved by fewest hops.
//!
//! # Architecture
//!
//! Each [`Converter`] is one edge from a source version to a target version.
//! Converters are registered in a [`ChainBuilder`] from the oldest version to
//! the newest; each registration names the upstream chains that produce the
//! new converter's source version. Jump converters (skipping intermediate
//! versions) are registered the same way, as additional upstreams.
//!
//! Every node keeps a table of the versions it can accept, the hop count to
//! each and the upstream chain owning that route. Only strictly shorter routes
//! replace recorded ones, so among equally short routes the upstream merged
//! first wins. Registration order is therefore part of the graph's behavior.
//!
//! [`ChainBuilder::build`] freezes the graph into a [`ChainResolver`], which
//! only reads it.
//!
//! # Example
//!
//! ```
//! use model_upgrade::chain::{ChainBuilder, Converter};
//! use model_upgrade::traits::migration::{ModelVersion, VersionedModel};
//! use derive_more::{From, TryInto};
//! use strum::{EnumDiscriminants, IntoStaticStr};
//!
//! #[derive(Debug, Clone)] pub struct Version1 { pub uid: String, pub name: String }
//! #[derive(Debug, Clone)] pub struct Version2 { pub id: String, pub project_name: String }
//! #[derive(Debug, Clone)] pub struct Version3 { pub project_id: String, pub project_name: String }
//!
//! #[derive(Debug, Clone, From, TryInto, EnumDiscriminants)]
//! #[strum_discriminants(name(ProjectVersion), derive(Hash, IntoStaticStr))]
//! pub enum Project {
//!     Version1(Version1),
//!     Version2(Version2),
//!     Version3(Version3),
//! }
//!
//! impl VersionedModel for Project {
//!     type Version = ProjectVersion;
//!     fn version(&self) -> ProjectVersion {
//!         self.into()
//!     }
//! }
//! impl ModelVersion<Project> for Version1 { const VERSION: ProjectVersion = ProjectVersion::Version1; }
//! impl ModelVersion<Project> for Version2 { const VERSION: ProjectVersion = ProjectVersion::Version2; }
//! impl ModelVersion<Project> for Version3 { const VERSION: ProjectVersion = ProjectVersion::Version3; }
//!
//! let mut builder = ChainBuilder::<Project>::new();
//! let v1 = builder.chain(
//!     Converter::new(|m: Version1| Version2 { id: m.uid, project_name: m.name })?,
//!     &[],
//! )?;
//! let v2 = builder.chain(
//!     Converter::new(|m: Version2| Version3 { project_id: m.id, project_name: m.project_name })?,
//!     &[v1],
//! )?;
//! let resolver = builder.build();
//!
//! let v3: Version3 = resolver.upgrade_to(v2, Version1 { uid: "TestV1".into(), name: "Test1".into() }.into())?;
//! assert_eq!(v3.project_id, "TestV1");
//! # Ok::<(), model_upgrade::errors::UpgradeError>(())
//! ```

mod builder;
mod converter;
mod node;
mod resolver;
mod schema;

pub use builder::*;
pub use converter::*;
pub use node::*;
pub use resolver::*;
pub use schema::*;

#[cfg(test)]
pub(crate) mod test_family;
