use thiserror::Error;

/// Result type local to coltype-json.
pub type Result<T> = std::result::Result<T, DecodeError>;

/// Decoding never partially succeeds; every variant names the offending input.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("failed to convert the JSON string '{0}' to a data type")]
    UnrecognizedType(String),

    #[error("failed to convert the JSON string '{0}' to a field")]
    UnrecognizedField(String),

    #[error("cannot load user-defined type '{class}': {source}")]
    Load {
        class: String,
        #[source]
        source: LoadError,
    },

    #[error("invalid JSON text: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Core(#[from] coltype_core::Error),
}

/// Failure to instantiate a native UDT by its class identifier.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("no user-defined type registered under '{0}'")]
    NotRegistered(String),

    #[error("loader returned '{actual}' for requested '{requested}'")]
    ClassMismatch { requested: String, actual: String },

    #[error("constructor for '{class}' failed: {reason}")]
    Construct { class: String, reason: String },
}
