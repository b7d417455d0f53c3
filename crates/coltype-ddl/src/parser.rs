//! Parser capability consumed by the orchestrator.

use coltype_core::DataType;

use crate::error::ParseError;

/// Anything that turns text into a type tree.
pub trait TypeParser {
    fn parse(&self, text: &str) -> Result<DataType, ParseError>;
}

impl<F> TypeParser for F
where
    F: Fn(&str) -> Result<DataType, ParseError>,
{
    fn parse(&self, text: &str) -> Result<DataType, ParseError> {
        self(text)
    }
}
