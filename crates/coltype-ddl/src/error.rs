use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

/// Structured, already-classified engine failure. Surfaced verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineError {
    pub error_class: String,
    pub message: String,
    pub parameters: BTreeMap<String, String>,
}

impl EngineError {
    pub fn new(error_class: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error_class: error_class.into(),
            message: message.into(),
            parameters: BTreeMap::new(),
        }
    }

    pub fn with_parameter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.error_class, self.message)
    }
}

impl std::error::Error for EngineError {}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("syntax error in '{input}': {message}")]
    Syntax { input: String, message: String },

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("cannot parse the schema '{schema}': {source}")]
    SchemaFailToParse {
        schema: String,
        #[source]
        source: Box<ParseError>,
    },
}

impl ParseError {
    pub fn syntax(input: impl Into<String>, message: impl Into<String>) -> Self {
        ParseError::Syntax {
            input: input.into(),
            message: message.into(),
        }
    }

    /// Classified errors carry their own error class and are never re-wrapped.
    pub fn is_classified(&self) -> bool {
        matches!(self, ParseError::Engine(_))
    }
}

impl From<coltype_core::Error> for ParseError {
    fn from(e: coltype_core::Error) -> Self {
        ParseError::Engine(EngineError::new("INVALID_DATA_TYPE", e.to_string()))
    }
}
