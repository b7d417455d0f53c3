//! Two-stage parse: a single type expression first, full schema syntax second.
//!
//! Precedence when the primary parser fails:
//! - a classified engine error is returned as-is; the fallback is not tried;
//! - otherwise the fallback gets a turn, and if it also fails the *primary*
//!   failure is reported, wrapped with the offending text.

use coltype_core::DataType;

use crate::error::ParseError;
use crate::parser::TypeParser;

pub fn parse_type_with_fallback<P, F>(
    text: &str,
    primary: &P,
    fallback: &F,
) -> Result<DataType, ParseError>
where
    P: TypeParser + ?Sized,
    F: TypeParser + ?Sized,
{
    let primary_err = match primary.parse(text) {
        Ok(data_type) => return Ok(data_type),
        Err(e) if e.is_classified() => return Err(e),
        Err(e) => e,
    };

    #[cfg(feature = "tracing")]
    tracing::debug!(error = %primary_err, "primary type parser failed, trying schema fallback");

    fallback
        .parse(text)
        .map_err(|_| ParseError::SchemaFailToParse {
            schema: text.to_string(),
            source: Box::new(primary_err),
        })
}

/// Bundles the two parser capabilities behind one `parse` call.
#[derive(Debug, Clone)]
pub struct DdlParser<P, F> {
    primary: P,
    fallback: F,
}

impl<P, F> DdlParser<P, F>
where
    P: TypeParser,
    F: TypeParser,
{
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }

    pub fn parse(&self, text: &str) -> Result<DataType, ParseError> {
        parse_type_with_fallback(text, &self.primary, &self.fallback)
    }
}
