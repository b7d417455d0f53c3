#![forbid(unsafe_code)]
//! coltype-json: the persisted schema wire format.
//!
//! Scalars encode as their canonical name string; composites as objects with a
//! `"type"` discriminator. Decoding matches each object against the exact,
//! sorted key set of one known shape, so key order in the input never matters
//! and partial objects are rejected.
//!
//! Native user-defined types are resolved through a [`UdtLoader`] supplied by
//! the caller.

pub mod decode;
pub mod encode;
pub mod error;
pub mod loader;

use coltype_core::{DataType, Fingerprint};

pub use decode::{from_json, from_json_str, name_to_type};
pub use encode::{to_json, to_json_string, to_pretty_json};
pub use error::{DecodeError, LoadError, Result};
pub use loader::{UdtLoader, UdtRegistry};

/// Identity of the canonical compact encoding.
pub fn fingerprint(data_type: &DataType) -> Fingerprint {
    Fingerprint::of_canonical_json(&to_json_string(data_type))
}
