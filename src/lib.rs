#![forbid(unsafe_code)]
//! coltype: column type trees for a tabular query engine's schema layer.
//!
//! - [`types`]: the type tree, canonical name registry, and comparators.
//! - [`json`]: the persisted JSON encoding.
//! - [`ddl`]: parse-with-fallback over pluggable text parsers.

pub use coltype_core as types;
pub use coltype_ddl as ddl;
pub use coltype_json as json;

pub use coltype_core::prelude::*;
pub use coltype_json::{
    from_json, from_json_str, to_json, to_json_string, UdtLoader, UdtRegistry,
};
