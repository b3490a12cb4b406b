//! Traits for versioned model families.
//!
//! # Architecture
//!
//! A model family is an enum with one variant per schema version. The enum's
//! strum discriminant is the version tag, so every value carries its version as
//! data. Each version struct converts into the family enum and back, which
//! lets a [`Converter`](crate::chain::Converter) be written against the typed
//! structs while the upgrade graph works on the family enum.
//!
//! # Example
//!
//! ```rust
//! use model_upgrade::prelude::*;
//! use derive_more::{From, TryInto};
//! use serde::{Deserialize, Serialize};
//! use strum::{EnumDiscriminants, EnumIter, IntoStaticStr};
//!
//! #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
//! pub struct UserV1 {
//!     pub id: String,
//!     pub name: String,
//! }
//!
//! #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
//! pub struct UserV2 {
//!     pub id: String,
//!     pub first_name: String,
//!     pub last_name: String,
//! }
//!
//! #[derive(Debug, Clone, From, TryInto, EnumDiscriminants)]
//! #[strum_discriminants(name(UserVersion), derive(Hash, IntoStaticStr, EnumIter))]
//! pub enum User {
//!     UserV1(UserV1),
//!     UserV2(UserV2),
//! }
//!
//! impl VersionedModel for User {
//!     type Version = UserVersion;
//!
//!     fn version(&self) -> UserVersion {
//!         self.into()
//!     }
//! }
//!
//! impl ModelVersion<User> for UserV1 {
//!     const VERSION: UserVersion = UserVersion::UserV1;
//! }
//!
//! impl ModelVersion<User> for UserV2 {
//!     const VERSION: UserVersion = UserVersion::UserV2;
//! }
//!
//! impl VersionStoreModel<User> for UserV2 {
//!     fn model_id(&self) -> String {
//!         self.id.clone()
//!     }
//! }
//!
//! let user: User = UserV1 { id: "1".into(), name: "Ada Lovelace".into() }.into();
//! assert_eq!(user.version(), UserVersion::UserV1);
//! assert_eq!(user.version_name(), "UserV1");
//! ```

mod traits;

pub use traits::*;
