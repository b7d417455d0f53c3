#![forbid(unsafe_code)]
//! coltype-core: the closed set of column types recognized by the schema layer.
//!
//! Design:
//! - `DataType` is a tagged union; every dispatch site matches exhaustively.
//! - Scalar singletons live in a process-wide read-only `registry`.
//! - `compare` hosts the recursive equivalence predicates used for schema
//!   compatibility checks.
//!
//! The JSON codec lives in `coltype-json`; textual parsing in `coltype-ddl`.

pub mod compare;
pub mod config;
pub mod datatype;
pub mod decimal;
pub mod error;
pub mod field;
pub mod fingerprint;
pub mod interval;
pub mod prelude;
pub mod registry;
pub mod udt;

pub use compare::{
    case_insensitive_resolution, case_sensitive_resolution, equals_compatible,
    equals_compatible_with, equals_ignore_case_and_nullability, equals_ignore_nullability,
    equals_structurally, equals_structurally_by_name, Resolver,
};
pub use config::TypeConfig;
pub use datatype::{ArrayType, DataType, MapType};
pub use decimal::DecimalType;
pub use error::{Error, Result};
pub use fingerprint::Fingerprint;
pub use field::{Metadata, StructField, StructType};
pub use interval::{DayTimeField, DayTimeIntervalType, YearMonthField, YearMonthIntervalType};
pub use udt::{ForeignUdt, UserDefinedType, UserType};

/// Crate version string, handy for provenance in persisted schemas.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
