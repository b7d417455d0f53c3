//! Convenient re-exports for downstream crates.

pub use crate::compare::{
    equals_compatible, equals_compatible_with, equals_structurally, equals_structurally_by_name,
    Resolver,
};
pub use crate::config::TypeConfig;
pub use crate::datatype::{ArrayType, DataType, MapType};
pub use crate::decimal::DecimalType;
pub use crate::error::{Error, Result};
pub use crate::field::{Metadata, StructField, StructType};
pub use crate::fingerprint::Fingerprint;
pub use crate::interval::{DayTimeIntervalType, YearMonthIntervalType};
pub use crate::udt::{ForeignUdt, UserDefinedType, UserType};
