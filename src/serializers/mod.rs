//! Ready-made [`ModelSerializer`](crate::traits::convert::ModelSerializer)
//! implementations.

#[cfg(feature = "bincode")]
mod binary;
#[cfg(feature = "json")]
mod json;

#[cfg(feature = "bincode")]
pub use binary::*;
#[cfg(feature = "json")]
pub use json::*;
