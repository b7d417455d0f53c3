//! The type tree: a closed, recursively nested set of column types.
//!
//! Every instance is a scalar, a parametric scalar, or a composite (array,
//! map, struct, UDT). Values are immutable; transforms such as
//! [`DataType::as_nullable`] return a new tree.

use std::borrow::Cow;
use std::fmt;

use crate::decimal::DecimalType;
use crate::field::{StructField, StructType};
use crate::interval::{DayTimeIntervalType, YearMonthIntervalType};
use crate::udt::UserType;

/// Field budget used by [`DataType::simple_string`].
pub const DEFAULT_MAX_TO_STRING_FIELDS: usize = 25;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataType {
    Null,
    Boolean,
    Byte,
    Short,
    Integer,
    Long,
    Float,
    Double,
    Binary,
    String,
    Date,
    Timestamp,
    TimestampNtz,
    CalendarInterval,
    DayTimeInterval(DayTimeIntervalType),
    YearMonthInterval(YearMonthIntervalType),
    Decimal(DecimalType),
    Char(u32),
    Varchar(u32),
    Array(ArrayType),
    Map(MapType),
    Struct(StructType),
    Udt(UserType),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayType {
    pub element_type: Box<DataType>,
    pub contains_null: bool,
}

impl ArrayType {
    pub fn new(element_type: DataType, contains_null: bool) -> Self {
        Self {
            element_type: Box::new(element_type),
            contains_null,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapType {
    pub key_type: Box<DataType>,
    pub value_type: Box<DataType>,
    pub value_contains_null: bool,
}

impl MapType {
    pub fn new(key_type: DataType, value_type: DataType, value_contains_null: bool) -> Self {
        Self {
            key_type: Box::new(key_type),
            value_type: Box::new(value_type),
            value_contains_null,
        }
    }
}

impl DataType {
    pub fn array(element_type: DataType, contains_null: bool) -> Self {
        DataType::Array(ArrayType::new(element_type, contains_null))
    }

    pub fn map(key_type: DataType, value_type: DataType, value_contains_null: bool) -> Self {
        DataType::Map(MapType::new(key_type, value_type, value_contains_null))
    }

    pub fn struct_of(fields: Vec<StructField>) -> Self {
        DataType::Struct(StructType::new(fields))
    }

    /// True for variants that own nested type trees.
    pub fn is_composite(&self) -> bool {
        matches!(
            self,
            DataType::Array(_) | DataType::Map(_) | DataType::Struct(_) | DataType::Udt(_)
        )
    }

    /// Estimated in-memory footprint of one value, used for cost decisions.
    pub fn default_size(&self) -> usize {
        match self {
            DataType::Null => 1,
            DataType::Boolean => 1,
            DataType::Byte => 1,
            DataType::Short => 2,
            DataType::Integer => 4,
            DataType::Long => 8,
            DataType::Float => 4,
            DataType::Double => 8,
            DataType::Binary => 100,
            DataType::String => 20,
            DataType::Date => 4,
            DataType::Timestamp => 8,
            DataType::TimestampNtz => 8,
            DataType::CalendarInterval => 16,
            DataType::DayTimeInterval(_) => 8,
            DataType::YearMonthInterval(_) => 4,
            DataType::Decimal(d) => d.default_size(),
            DataType::Char(len) | DataType::Varchar(len) => *len as usize,
            // Assume a single element.
            DataType::Array(a) => a.element_type.default_size(),
            DataType::Map(m) => m.key_type.default_size() + m.value_type.default_size(),
            DataType::Struct(s) => s.iter().map(|f| f.data_type.default_size()).sum(),
            DataType::Udt(u) => u.sql_type().default_size(),
        }
    }

    /// Canonical lowercase name. Parametric scalars embed their parameters.
    pub fn type_name(&self) -> Cow<'static, str> {
        match self {
            DataType::Null => Cow::Borrowed("void"),
            DataType::Boolean => Cow::Borrowed("boolean"),
            DataType::Byte => Cow::Borrowed("byte"),
            DataType::Short => Cow::Borrowed("short"),
            DataType::Integer => Cow::Borrowed("integer"),
            DataType::Long => Cow::Borrowed("long"),
            DataType::Float => Cow::Borrowed("float"),
            DataType::Double => Cow::Borrowed("double"),
            DataType::Binary => Cow::Borrowed("binary"),
            DataType::String => Cow::Borrowed("string"),
            DataType::Date => Cow::Borrowed("date"),
            DataType::Timestamp => Cow::Borrowed("timestamp"),
            DataType::TimestampNtz => Cow::Borrowed("timestamp_ntz"),
            DataType::CalendarInterval => Cow::Borrowed("interval"),
            DataType::DayTimeInterval(i) => Cow::Owned(i.type_name()),
            DataType::YearMonthInterval(i) => Cow::Owned(i.type_name()),
            DataType::Decimal(d) => Cow::Owned(d.type_name()),
            DataType::Char(len) => Cow::Owned(format!("char({len})")),
            DataType::Varchar(len) => Cow::Owned(format!("varchar({len})")),
            DataType::Array(_) => Cow::Borrowed("array"),
            DataType::Map(_) => Cow::Borrowed("map"),
            DataType::Struct(_) => Cow::Borrowed("struct"),
            DataType::Udt(u) => Cow::Owned(u.type_name()),
        }
    }

    /// Human-facing name; structs are truncated to the default field budget.
    pub fn simple_string(&self) -> String {
        self.simple_string_with(DEFAULT_MAX_TO_STRING_FIELDS)
    }

    /// Like [`simple_string`](Self::simple_string) but with an explicit field
    /// budget applied at every struct level.
    pub fn simple_string_with(&self, max_fields: usize) -> String {
        match self {
            DataType::Byte => "tinyint".to_string(),
            DataType::Short => "smallint".to_string(),
            DataType::Integer => "int".to_string(),
            DataType::Long => "bigint".to_string(),
            DataType::Array(a) => {
                format!("array<{}>", a.element_type.simple_string_with(max_fields))
            }
            DataType::Map(m) => format!(
                "map<{},{}>",
                m.key_type.simple_string_with(max_fields),
                m.value_type.simple_string_with(max_fields)
            ),
            DataType::Struct(s) => {
                let parts: Vec<String> = s
                    .iter()
                    .map(|f| format!("{}:{}", f.name, f.data_type.simple_string_with(max_fields)))
                    .collect();
                truncated_string(&parts, "struct<", ",", ">", max_fields)
            }
            DataType::Udt(u) => u.type_name(),
            DataType::Null
            | DataType::Boolean
            | DataType::Float
            | DataType::Double
            | DataType::Binary
            | DataType::String
            | DataType::Date
            | DataType::Timestamp
            | DataType::TimestampNtz
            | DataType::CalendarInterval
            | DataType::DayTimeInterval(_)
            | DataType::YearMonthInterval(_)
            | DataType::Decimal(_)
            | DataType::Char(_)
            | DataType::Varchar(_) => self.type_name().into_owned(),
        }
    }

    /// Name used when persisting to a catalog; never truncated.
    pub fn catalog_string(&self) -> String {
        match self {
            DataType::Array(a) => format!("array<{}>", a.element_type.catalog_string()),
            DataType::Map(m) => format!(
                "map<{},{}>",
                m.key_type.catalog_string(),
                m.value_type.catalog_string()
            ),
            DataType::Struct(s) => {
                let parts: Vec<String> = s
                    .iter()
                    .map(|f| format!("{}:{}", f.name, f.data_type.catalog_string()))
                    .collect();
                format!("struct<{}>", parts.join(","))
            }
            DataType::Udt(u) => u.sql_type().simple_string(),
            _ => self.simple_string_with(usize::MAX),
        }
    }

    /// SQL spelling: upper-cased simple string, composites rendered recursively.
    pub fn sql(&self) -> String {
        match self {
            DataType::Array(a) => format!("ARRAY<{}>", a.element_type.sql()),
            DataType::Map(m) => format!("MAP<{}, {}>", m.key_type.sql(), m.value_type.sql()),
            DataType::Struct(s) => {
                let parts: Vec<String> = s.iter().map(StructField::sql).collect();
                format!("STRUCT<{}>", parts.join(", "))
            }
            DataType::Udt(u) => u.sql_type().sql(),
            _ => self.simple_string_with(usize::MAX).to_uppercase(),
        }
    }

    /// Same shape with every nullability flag forced to `true`, recursively.
    ///
    /// A UDT keeps its identity; only its representation type is relaxed (see
    /// [`UserType::as_nullable`]).
    pub fn as_nullable(&self) -> DataType {
        match self {
            DataType::Array(a) => DataType::array(a.element_type.as_nullable(), true),
            DataType::Map(m) => {
                DataType::map(m.key_type.as_nullable(), m.value_type.as_nullable(), true)
            }
            DataType::Struct(s) => DataType::Struct(
                s.iter()
                    .map(|f| StructField {
                        name: f.name.clone(),
                        data_type: f.data_type.as_nullable(),
                        nullable: true,
                        metadata: f.metadata.clone(),
                    })
                    .collect(),
            ),
            DataType::Udt(u) => DataType::Udt(u.as_nullable()),
            _ => self.clone(),
        }
    }

    /// Depth-first: does `f` hold for this node or any descendant?
    pub fn exists_recursively<F>(&self, f: F) -> bool
    where
        F: Fn(&DataType) -> bool,
    {
        self.exists_with(&f)
    }

    fn exists_with(&self, f: &dyn Fn(&DataType) -> bool) -> bool {
        if f(self) {
            return true;
        }
        match self {
            DataType::Array(a) => a.element_type.exists_with(f),
            DataType::Map(m) => m.key_type.exists_with(f) || m.value_type.exists_with(f),
            DataType::Struct(s) => s.iter().any(|field| field.data_type.exists_with(f)),
            DataType::Udt(u) => u.sql_type().exists_with(f),
            _ => false,
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.simple_string())
    }
}

impl From<DecimalType> for DataType {
    fn from(d: DecimalType) -> Self {
        DataType::Decimal(d)
    }
}

impl From<StructType> for DataType {
    fn from(s: StructType) -> Self {
        DataType::Struct(s)
    }
}

impl From<ArrayType> for DataType {
    fn from(a: ArrayType) -> Self {
        DataType::Array(a)
    }
}

impl From<MapType> for DataType {
    fn from(m: MapType) -> Self {
        DataType::Map(m)
    }
}

/// Join `parts`, keeping at most `max_fields - 1` of them when over budget.
fn truncated_string(
    parts: &[String],
    start: &str,
    sep: &str,
    end: &str,
    max_fields: usize,
) -> String {
    if parts.len() <= max_fields {
        return format!("{start}{}{end}", parts.join(sep));
    }
    let kept = max_fields.saturating_sub(1);
    let mut out = String::from(start);
    for part in &parts[..kept] {
        out.push_str(part);
        out.push_str(sep);
    }
    out.push_str(&format!("... {} more fields{end}", parts.len() - kept));
    out
}
