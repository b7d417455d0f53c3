//! Recursive structural equivalence predicates used for schema compatibility.
//!
//! All predicates walk both trees depth-first and compare struct fields by
//! position, never by name lookup. A UDT pair matches when both sides carry the
//! same identifiers and their representation types match under the same
//! predicate. Any other pair that is not a matching composite falls back to
//! plain value equality, except in [`equals_structurally_by_name`].

use crate::datatype::{ArrayType, DataType, MapType};
use crate::field::StructField;
use crate::udt::UserType;

/// Identifier equality, case-sensitive or not depending on configuration.
pub type Resolver = fn(&str, &str) -> bool;

pub fn case_sensitive_resolution(a: &str, b: &str) -> bool {
    a == b
}

pub fn case_insensitive_resolution(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// Can data of type `from` be written where `to` is expected, nullability-wise?
///
/// `to` may be more permissive than `from`, never less. Field names must match.
pub fn equals_compatible(from: &DataType, to: &DataType) -> bool {
    equals_compatible_with(from, to, false)
}

/// [`equals_compatible`] with optional field-name relaxation.
pub fn equals_compatible_with(from: &DataType, to: &DataType, ignore_name: bool) -> bool {
    match (from, to) {
        (DataType::Array(f), DataType::Array(t)) => {
            (t.contains_null || !f.contains_null)
                && equals_compatible_with(&f.element_type, &t.element_type, ignore_name)
        }
        (DataType::Map(f), DataType::Map(t)) => {
            (t.value_contains_null || !f.value_contains_null)
                && equals_compatible_with(&f.key_type, &t.key_type, ignore_name)
                && equals_compatible_with(&f.value_type, &t.value_type, ignore_name)
        }
        (DataType::Struct(f), DataType::Struct(t)) => {
            zip_fields(&f.fields, &t.fields, |f, t| {
                (ignore_name || f.name == t.name)
                    && (t.nullable || !f.nullable)
                    && equals_compatible_with(&f.data_type, &t.data_type, ignore_name)
            })
        }
        (DataType::Udt(f), DataType::Udt(t)) => {
            udt_children(f, t, |f, t| equals_compatible_with(f, t, ignore_name))
        }
        (f, t) => f == t,
    }
}

/// Same shape, ignoring field names. Nullability flags must be identical unless
/// `ignore_nullability` is set.
pub fn equals_structurally(from: &DataType, to: &DataType, ignore_nullability: bool) -> bool {
    match (from, to) {
        (DataType::Array(l), DataType::Array(r)) => {
            equals_structurally(&l.element_type, &r.element_type, ignore_nullability)
                && (ignore_nullability || l.contains_null == r.contains_null)
        }
        (DataType::Map(l), DataType::Map(r)) => {
            equals_structurally(&l.key_type, &r.key_type, ignore_nullability)
                && equals_structurally(&l.value_type, &r.value_type, ignore_nullability)
                && (ignore_nullability || l.value_contains_null == r.value_contains_null)
        }
        (DataType::Struct(l), DataType::Struct(r)) => zip_fields(&l.fields, &r.fields, |l, r| {
            equals_structurally(&l.data_type, &r.data_type, ignore_nullability)
                && (ignore_nullability || l.nullable == r.nullable)
        }),
        (DataType::Udt(l), DataType::Udt(r)) => {
            udt_children(l, r, |l, r| equals_structurally(l, r, ignore_nullability))
        }
        (l, r) => l == r,
    }
}

/// Do both trees share the same field-name skeleton under `resolver`?
///
/// Only names are checked, so `struct<a:int>` matches `struct<a:string>`.
/// Composite kinds must still line up: an array never matches a struct, and a
/// composite never matches a leaf.
pub fn equals_structurally_by_name(
    from: &DataType,
    to: &DataType,
    resolver: &dyn Fn(&str, &str) -> bool,
) -> bool {
    match (from, to) {
        (DataType::Array(l), DataType::Array(r)) => {
            equals_structurally_by_name(&l.element_type, &r.element_type, resolver)
        }
        (DataType::Map(l), DataType::Map(r)) => {
            equals_structurally_by_name(&l.key_type, &r.key_type, resolver)
                && equals_structurally_by_name(&l.value_type, &r.value_type, resolver)
        }
        (DataType::Struct(l), DataType::Struct(r)) => zip_fields(&l.fields, &r.fields, |l, r| {
            resolver(&l.name, &r.name)
                && equals_structurally_by_name(&l.data_type, &r.data_type, resolver)
        }),
        (DataType::Udt(l), DataType::Udt(r)) => {
            equals_structurally_by_name(l.sql_type(), r.sql_type(), resolver)
        }
        (l, r) => !l.is_composite() && !r.is_composite(),
    }
}

/// Exact names, nullability ignored everywhere.
pub fn equals_ignore_nullability(left: &DataType, right: &DataType) -> bool {
    match (left, right) {
        (DataType::Array(l), DataType::Array(r)) => {
            array_children(l, r, equals_ignore_nullability)
        }
        (DataType::Map(l), DataType::Map(r)) => map_children(l, r, equals_ignore_nullability),
        (DataType::Struct(l), DataType::Struct(r)) => zip_fields(&l.fields, &r.fields, |l, r| {
            l.name == r.name && equals_ignore_nullability(&l.data_type, &r.data_type)
        }),
        (DataType::Udt(l), DataType::Udt(r)) => udt_children(l, r, equals_ignore_nullability),
        (l, r) => l == r,
    }
}

/// Case-insensitive names, nullability ignored everywhere.
pub fn equals_ignore_case_and_nullability(from: &DataType, to: &DataType) -> bool {
    match (from, to) {
        (DataType::Array(l), DataType::Array(r)) => {
            array_children(l, r, equals_ignore_case_and_nullability)
        }
        (DataType::Map(l), DataType::Map(r)) => {
            map_children(l, r, equals_ignore_case_and_nullability)
        }
        (DataType::Struct(l), DataType::Struct(r)) => zip_fields(&l.fields, &r.fields, |l, r| {
            case_insensitive_resolution(&l.name, &r.name)
                && equals_ignore_case_and_nullability(&l.data_type, &r.data_type)
        }),
        (DataType::Udt(l), DataType::Udt(r)) => {
            udt_children(l, r, equals_ignore_case_and_nullability)
        }
        (l, r) => l == r,
    }
}

/// Field counts must match exactly; pairs are checked in order.
fn zip_fields<F>(left: &[StructField], right: &[StructField], f: F) -> bool
where
    F: Fn(&StructField, &StructField) -> bool,
{
    left.len() == right.len() && left.iter().zip(right).all(|(l, r)| f(l, r))
}

fn array_children(l: &ArrayType, r: &ArrayType, eq: fn(&DataType, &DataType) -> bool) -> bool {
    eq(&l.element_type, &r.element_type)
}

fn map_children(l: &MapType, r: &MapType, eq: fn(&DataType, &DataType) -> bool) -> bool {
    eq(&l.key_type, &r.key_type) && eq(&l.value_type, &r.value_type)
}

fn udt_children<F>(l: &UserType, r: &UserType, eq: F) -> bool
where
    F: Fn(&DataType, &DataType) -> bool,
{
    l.same_class(r) && eq(l.sql_type(), r.sql_type())
}
