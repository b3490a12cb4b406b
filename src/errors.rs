use thiserror::Error;

pub type UpgradeResult<T> = Result<T, UpgradeError>;

/// Boxed error produced by a serializer collaborator.
pub type SerializerError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Error, Debug)]
pub enum UpgradeError {
    #[error("Invalid Argument: {0}")]
    InvalidArgument(String),

    #[error("Incompatible Chain: {converter} can't convert model to \"{expected}\" (produces \"{found}\")")]
    IncompatibleChain {
        converter: String,
        expected: String,
        found: String,
    },

    #[error("No Path Found: can't find chain to convert \"{version}\" to \"{target}\"")]
    NoPathFound { version: String, target: String },

    #[error("Chain Incomplete: {converter} expected \"{expected}\" from its upstream chain but got \"{found}\"")]
    ChainIncomplete {
        converter: String,
        expected: String,
        found: String,
    },

    #[error("Upgrade Incomplete: \"{version}\" can't upgrade to \"{expected}\" (stopped at \"{found}\"), please check the upgrade chain is complete")]
    UpgradeIncomplete {
        version: String,
        expected: String,
        found: String,
    },

    #[error("Unknown Version Type: can't find model version \"{0}\"")]
    UnknownVersionType(String),

    #[error("Decode Error: {0}")]
    Decode(#[source] SerializerError),

    #[error("Encode Error: {0}")]
    Encode(#[source] SerializerError),
}

impl UpgradeError {
    /// Whether the error points at a wiring mistake in the chain graph rather
    /// than at the data being upgraded.
    pub fn is_wiring_error(&self) -> bool {
        matches!(
            self,
            UpgradeError::IncompatibleChain { .. }
                | UpgradeError::ChainIncomplete { .. }
                | UpgradeError::UpgradeIncomplete { .. }
        )
    }

    pub(crate) fn decode<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        UpgradeError::Decode(Box::new(err))
    }

    pub(crate) fn encode<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        UpgradeError::Encode(Box::new(err))
    }
}
