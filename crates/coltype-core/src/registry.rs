//! Canonical name -> singleton instance for every parameter-less type.
//!
//! Built once on first use and never mutated afterwards, so concurrent
//! readers need no synchronization.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::datatype::DataType;
use crate::error::{Error, Result};
use crate::interval::{DayTimeIntervalType, YearMonthIntervalType};

static REGISTRY: Lazy<HashMap<String, DataType>> = Lazy::new(|| {
    let scalars = [
        DataType::Null,
        DataType::Date,
        DataType::Timestamp,
        DataType::Binary,
        DataType::Integer,
        DataType::Boolean,
        DataType::Long,
        DataType::Double,
        DataType::Float,
        DataType::Short,
        DataType::Byte,
        DataType::String,
        DataType::CalendarInterval,
        DataType::TimestampNtz,
    ];
    let day_time = DayTimeIntervalType::all().map(DataType::DayTimeInterval);
    let year_month = YearMonthIntervalType::all().map(DataType::YearMonthInterval);

    scalars
        .into_iter()
        .chain(day_time)
        .chain(year_month)
        .map(|t| (t.type_name().into_owned(), t))
        .collect()
});

/// Exact, case-sensitive lookup on the canonical lowercase name.
pub fn lookup(name: &str) -> Option<&'static DataType> {
    REGISTRY.get(name)
}

/// Like [`lookup`], but a miss is an error naming the literal.
pub fn resolve(name: &str) -> Result<DataType> {
    lookup(name)
        .cloned()
        .ok_or_else(|| Error::UnknownTypeName(name.to_string()))
}

/// All registered canonical names, sorted.
pub fn canonical_names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = REGISTRY.keys().map(String::as_str).collect();
    names.sort_unstable();
    names
}
