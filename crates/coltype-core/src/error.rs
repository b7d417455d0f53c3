use thiserror::Error;

/// Canonical result for core.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown data type name '{0}'")]
    UnknownTypeName(String),

    #[error("invalid interval: start field '{start}' is after end field '{end}'")]
    InvalidInterval { start: String, end: String },

    #[error("invalid decimal({precision},{scale}): {reason}")]
    InvalidDecimal {
        precision: u32,
        scale: i32,
        reason: &'static str,
    },

    #[error("invalid schema fingerprint '{0}': expected 64 hex digits")]
    InvalidFingerprint(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}
