//! Schema-layer configuration that downstream crates can serialize/deserialize.

use serde::{Deserialize, Serialize};

use crate::compare::{
    case_insensitive_resolution, case_sensitive_resolution, equals_ignore_case_and_nullability,
    equals_ignore_nullability, Resolver,
};
use crate::datatype::{DataType, DEFAULT_MAX_TO_STRING_FIELDS};
use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypeConfig {
    /// Struct fields shown by `simple_string` before truncating.
    pub max_to_string_fields: usize,

    /// Whether field-name comparisons honour case.
    pub case_sensitive: bool,
}

impl Default for TypeConfig {
    fn default() -> Self {
        Self {
            max_to_string_fields: DEFAULT_MAX_TO_STRING_FIELDS,
            case_sensitive: false,
        }
    }
}

impl TypeConfig {
    /// Create a config from environment variables, falling back to defaults.
    ///
    /// Environment variables:
    /// - `COLTYPE_MAX_TO_STRING_FIELDS`: struct field budget for simple strings
    /// - `COLTYPE_CASE_SENSITIVE`: `true`/`false`
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(s) = std::env::var("COLTYPE_MAX_TO_STRING_FIELDS") {
            if let Ok(v) = s.parse::<usize>() {
                cfg.max_to_string_fields = v;
            }
        }

        if let Ok(s) = std::env::var("COLTYPE_CASE_SENSITIVE") {
            if let Ok(v) = s.trim().to_ascii_lowercase().parse::<bool>() {
                cfg.case_sensitive = v;
            }
        }

        cfg
    }

    /// Reject settings that would make string rendering meaningless.
    pub fn validate(&self) -> Result<()> {
        if self.max_to_string_fields == 0 {
            return Err(Error::Config(
                "max_to_string_fields must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn resolver(&self) -> Resolver {
        if self.case_sensitive {
            case_sensitive_resolution
        } else {
            case_insensitive_resolution
        }
    }

    /// Same type modulo nullability, with names compared per `case_sensitive`.
    pub fn same_type(&self, left: &DataType, right: &DataType) -> bool {
        if self.case_sensitive {
            equals_ignore_nullability(left, right)
        } else {
            equals_ignore_case_and_nullability(left, right)
        }
    }

    pub fn simple_string(&self, data_type: &DataType) -> String {
        data_type.simple_string_with(self.max_to_string_fields)
    }
}
