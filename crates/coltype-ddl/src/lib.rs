#![forbid(unsafe_code)]
//! coltype-ddl: textual entry point for type descriptions.
//!
//! No grammar lives here. Callers plug in a primary parser (a single type
//! expression) and a fallback parser (full schema syntax); this crate only
//! decides which one's answer, or which failure, reaches the caller.

pub mod error;
pub mod fallback;
pub mod parser;

pub use error::{EngineError, ParseError};
pub use fallback::{parse_type_with_fallback, DdlParser};
pub use parser::TypeParser;
