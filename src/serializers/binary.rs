use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::traits::convert::ModelSerializer;

#[derive(Error, Debug)]
pub enum BincodeSerializerError {
    #[error(transparent)]
    Encode(#[from] bincode::error::EncodeError),
    #[error(transparent)]
    Decode(#[from] bincode::error::DecodeError),
    #[error("Payload is not valid hex: {0}")]
    Hex(#[from] hex::FromHexError),
    #[error("{0} trailing bytes after payload")]
    TrailingBytes(usize),
}

/// Compact binary payloads: bincode's standard configuration, hex encoded so
/// the payload stays a string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BincodeSerializer;

impl ModelSerializer for BincodeSerializer {
    type Error = BincodeSerializerError;

    fn serialize<V: Serialize>(&self, model: &V) -> Result<String, Self::Error> {
        let bytes = bincode::serde::encode_to_vec(model, bincode::config::standard())?;
        Ok(hex::encode(bytes))
    }

    fn deserialize<V: DeserializeOwned>(&self, data: &str) -> Result<V, Self::Error> {
        let bytes = hex::decode(data)?;
        let (model, read) = bincode::serde::decode_from_slice(&bytes, bincode::config::standard())?;
        if read != bytes.len() {
            return Err(BincodeSerializerError::TrailingBytes(bytes.len() - read));
        }
        Ok(model)
    }
}
