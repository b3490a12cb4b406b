pub mod convert;
pub mod migration;

// Re-export commonly used types
pub use convert::ModelSerializer;
pub use migration::{ModelVersion, VersionStoreModel, VersionTag, VersionedModel};
