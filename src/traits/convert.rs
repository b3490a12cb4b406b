use serde::Serialize;
use serde::de::DeserializeOwned;

/// Encodes model versions to text and decodes them back.
///
/// This is the only boundary that touches the payload format. Implementations
/// decide the encoding; the upgrade chain only ever sees typed values.
pub trait ModelSerializer {
    /// Error produced by either direction.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Serializes the specified model.
    fn serialize<V: Serialize>(&self, model: &V) -> Result<String, Self::Error>;

    /// Deserializes `data` as a `V`.
    fn deserialize<V: DeserializeOwned>(&self, data: &str) -> Result<V, Self::Error>;
}

impl<S: ModelSerializer> ModelSerializer for &S {
    type Error = S::Error;

    fn serialize<V: Serialize>(&self, model: &V) -> Result<String, Self::Error> {
        (**self).serialize(model)
    }

    fn deserialize<V: DeserializeOwned>(&self, data: &str) -> Result<V, Self::Error> {
        (**self).deserialize(data)
    }
}
