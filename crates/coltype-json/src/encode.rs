//! Type tree -> canonical JSON.
//!
//! Field order inside each object is fixed so the compact text is stable and
//! can be fingerprinted.

use serde_json::{json, Map, Value};

use coltype_core::{DataType, StructField, UserType};

pub fn to_json(data_type: &DataType) -> Value {
    match data_type {
        DataType::Array(a) => json!({
            "type": "array",
            "elementType": to_json(&a.element_type),
            "containsNull": a.contains_null,
        }),
        DataType::Map(m) => json!({
            "type": "map",
            "keyType": to_json(&m.key_type),
            "valueType": to_json(&m.value_type),
            "valueContainsNull": m.value_contains_null,
        }),
        DataType::Struct(s) => json!({
            "type": "struct",
            "fields": s.iter().map(field_to_json).collect::<Vec<_>>(),
        }),
        DataType::Udt(UserType::Native(udt)) => json!({
            "type": "udt",
            "class": udt.class_name(),
            "pyClass": udt.py_udt(),
            "sqlType": to_json(udt.sql_type()),
        }),
        DataType::Udt(UserType::Foreign(udt)) => json!({
            "type": "udt",
            "pyClass": udt.py_class,
            "serializedClass": udt.serialized_class,
            "sqlType": to_json(&udt.sql_type),
        }),
        DataType::Null
        | DataType::Boolean
        | DataType::Byte
        | DataType::Short
        | DataType::Integer
        | DataType::Long
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
        | DataType::Varchar(_) => Value::String(data_type.type_name().into_owned()),
    }
}

fn field_to_json(field: &StructField) -> Value {
    let mut obj = Map::new();
    obj.insert("name".into(), Value::String(field.name.clone()));
    obj.insert("type".into(), to_json(&field.data_type));
    obj.insert("nullable".into(), Value::Bool(field.nullable));
    obj.insert(
        "metadata".into(),
        Value::Object(field.metadata.as_map().clone()),
    );
    Value::Object(obj)
}

/// Compact text, as persisted.
pub fn to_json_string(data_type: &DataType) -> String {
    to_json(data_type).to_string()
}

pub fn to_pretty_json(data_type: &DataType) -> String {
    // Serializing a `Value` cannot fail.
    serde_json::to_string_pretty(&to_json(data_type)).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use coltype_core::{DecimalType, Metadata};

    #[test]
    fn scalars_encode_as_names() {
        assert_eq!(to_json(&DataType::Integer), json!("integer"));
        assert_eq!(to_json(&DataType::Null), json!("void"));
        assert_eq!(
            to_json(&DataType::Decimal(DecimalType::new(10, 2).unwrap())),
            json!("decimal(10,2)")
        );
        assert_eq!(to_json(&DataType::Varchar(8)), json!("varchar(8)"));
    }

    #[test]
    fn array_and_map_shapes() {
        assert_eq!(
            to_json_string(&DataType::array(DataType::String, true)),
            r#"{"type":"array","elementType":"string","containsNull":true}"#
        );
        assert_eq!(
            to_json_string(&DataType::map(DataType::String, DataType::Long, false)),
            r#"{"type":"map","keyType":"string","valueType":"long","valueContainsNull":false}"#
        );
    }

    #[test]
    fn struct_fields_keep_order_and_metadata() {
        let t = DataType::struct_of(vec![
            StructField::new("b", DataType::Integer, false)
                .with_metadata(Metadata::empty().with("comment", "first")),
            StructField::new("a", DataType::Boolean, true),
        ]);
        assert_eq!(
            to_json_string(&t),
            concat!(
                r#"{"type":"struct","fields":["#,
                r#"{"name":"b","type":"integer","nullable":false,"metadata":{"comment":"first"}},"#,
                r#"{"name":"a","type":"boolean","nullable":true,"metadata":{}}]}"#
            )
        );
    }
}
