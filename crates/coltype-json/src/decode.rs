//! Canonical JSON -> type tree.
//!
//! Objects are matched by their sorted key set first, then by the value kinds
//! each shape requires. Anything that does not fit one shape exactly is an
//! error carrying the compacted input.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};

use coltype_core::{
    registry, DataType, DecimalType, ForeignUdt, Metadata, StructField, StructType, UserType,
};

use crate::error::{DecodeError, Result};
use crate::loader::UdtLoader;

static FIXED_DECIMAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^decimal\(\s*(\d+)\s*,\s*(-?\d+)\s*\)$").expect("FIXED_DECIMAL pattern")
});
static CHAR_TYPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^char\(\s*(\d+)\s*\)$").expect("CHAR_TYPE pattern"));
static VARCHAR_TYPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^varchar\(\s*(\d+)\s*\)$").expect("VARCHAR_TYPE pattern"));

/// Resolve a bare type name: decimal forms, char/varchar, legacy aliases,
/// then the canonical registry.
pub fn name_to_type(name: &str) -> Result<DataType> {
    let unrecognized = || DecodeError::UnrecognizedType(name.to_string());

    if name == "decimal" {
        return Ok(DataType::Decimal(DecimalType::USER_DEFAULT));
    }
    if let Some(caps) = FIXED_DECIMAL.captures(name) {
        let precision = caps[1].parse::<u32>().map_err(|_| unrecognized())?;
        let scale = caps[2].parse::<i32>().map_err(|_| unrecognized())?;
        return Ok(DataType::Decimal(DecimalType::new(precision, scale)?));
    }
    if let Some(caps) = CHAR_TYPE.captures(name) {
        let length = caps[1].parse::<u32>().map_err(|_| unrecognized())?;
        return Ok(DataType::Char(length));
    }
    if let Some(caps) = VARCHAR_TYPE.captures(name) {
        let length = caps[1].parse::<u32>().map_err(|_| unrecognized())?;
        return Ok(DataType::Varchar(length));
    }
    match name {
        // Legacy spellings kept for stored schemas.
        "null" => Ok(DataType::Null),
        "timestamp_ltz" => Ok(DataType::Timestamp),
        other => registry::lookup(other).cloned().ok_or_else(unrecognized),
    }
}

pub fn from_json(json: &Value, loader: &dyn UdtLoader) -> Result<DataType> {
    match json {
        Value::String(name) => name_to_type(name),
        Value::Object(obj) => parse_object(obj, loader)?
            .ok_or_else(|| DecodeError::UnrecognizedType(json.to_string())),
        _ => Err(DecodeError::UnrecognizedType(json.to_string())),
    }
}

pub fn from_json_str(text: &str, loader: &dyn UdtLoader) -> Result<DataType> {
    let json: Value = serde_json::from_str(text)?;
    from_json(&json, loader)
}

fn sorted_keys(obj: &Map<String, Value>) -> Vec<&str> {
    let mut keys: Vec<&str> = obj.keys().map(String::as_str).collect();
    keys.sort_unstable();
    keys
}

/// `Ok(None)` means the object matched no known shape.
fn parse_object(obj: &Map<String, Value>, loader: &dyn UdtLoader) -> Result<Option<DataType>> {
    let tag = obj.get("type").and_then(Value::as_str);
    let keys = sorted_keys(obj);

    match (keys.as_slice(), tag) {
        (["containsNull", "elementType", "type"], Some("array")) => {
            let Some(contains_null) = obj["containsNull"].as_bool() else {
                return Ok(None);
            };
            let element = from_json(&obj["elementType"], loader)?;
            Ok(Some(DataType::array(element, contains_null)))
        }
        (["keyType", "type", "valueContainsNull", "valueType"], Some("map")) => {
            let Some(value_contains_null) = obj["valueContainsNull"].as_bool() else {
                return Ok(None);
            };
            let key = from_json(&obj["keyType"], loader)?;
            let value = from_json(&obj["valueType"], loader)?;
            Ok(Some(DataType::map(key, value, value_contains_null)))
        }
        (["fields", "type"], Some("struct")) => {
            let Some(fields) = obj["fields"].as_array() else {
                return Ok(None);
            };
            let fields = fields
                .iter()
                .map(|f| parse_struct_field(f, loader))
                .collect::<Result<Vec<_>>>()?;
            Ok(Some(DataType::Struct(StructType::new(fields))))
        }
        (["class", "pyClass", "sqlType", "type"], Some("udt")) => {
            let Some(class) = obj["class"].as_str() else {
                return Ok(None);
            };
            let udt = loader.load(class).map_err(|source| DecodeError::Load {
                class: class.to_string(),
                source,
            })?;
            Ok(Some(DataType::Udt(UserType::Native(udt))))
        }
        (["pyClass", "serializedClass", "sqlType", "type"], Some("udt")) => {
            let (Some(py_class), Some(serialized)) = (
                obj["pyClass"].as_str(),
                obj["serializedClass"].as_str(),
            ) else {
                return Ok(None);
            };
            let sql_type = from_json(&obj["sqlType"], loader)?;
            Ok(Some(DataType::Udt(UserType::Foreign(ForeignUdt::new(
                sql_type, py_class, serialized,
            )))))
        }
        _ => Ok(None),
    }
}

fn parse_struct_field(json: &Value, loader: &dyn UdtLoader) -> Result<StructField> {
    let unrecognized = || DecodeError::UnrecognizedField(json.to_string());
    let obj = json.as_object().ok_or_else(unrecognized)?;

    let metadata = match sorted_keys(obj).as_slice() {
        ["metadata", "name", "nullable", "type"] => match &obj["metadata"] {
            Value::Object(m) => Metadata::from_map(m.clone()),
            _ => return Err(unrecognized()),
        },
        // Older writers omitted metadata.
        ["name", "nullable", "type"] => Metadata::empty(),
        _ => return Err(unrecognized()),
    };
    let (Some(name), Some(nullable)) = (obj["name"].as_str(), obj["nullable"].as_bool()) else {
        return Err(unrecognized());
    };
    let data_type = from_json(&obj["type"], loader)?;
    Ok(StructField::new(name, data_type, nullable).with_metadata(metadata))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::UdtRegistry;
    use coltype_core::{DayTimeField, DayTimeIntervalType};
    use serde_json::json;

    fn decode(v: Value) -> Result<DataType> {
        from_json(&v, &UdtRegistry::new())
    }

    #[test]
    fn decimal_forms() {
        assert_eq!(
            name_to_type("decimal").unwrap(),
            DataType::Decimal(DecimalType::USER_DEFAULT)
        );
        assert_eq!(
            name_to_type("decimal(10,2)").unwrap(),
            DataType::Decimal(DecimalType::new(10, 2).unwrap())
        );
        assert_eq!(
            name_to_type("decimal( 5 , -2 )").unwrap(),
            DataType::Decimal(DecimalType::new(5, -2).unwrap())
        );
        assert!(matches!(
            name_to_type("decimal(40,2)"),
            Err(DecodeError::Core(_))
        ));
    }

    #[test]
    fn char_and_varchar() {
        assert_eq!(name_to_type("char(3)").unwrap(), DataType::Char(3));
        assert_eq!(name_to_type("varchar(255)").unwrap(), DataType::Varchar(255));
        assert!(name_to_type("varchar(x)").is_err());
    }

    #[test]
    fn legacy_aliases() {
        assert_eq!(name_to_type("null").unwrap(), DataType::Null);
        assert_eq!(name_to_type("timestamp_ltz").unwrap(), DataType::Timestamp);
    }

    #[test]
    fn interval_names() {
        let t = name_to_type("interval hour to minute").unwrap();
        assert_eq!(
            t,
            DataType::DayTimeInterval(
                DayTimeIntervalType::new(DayTimeField::Hour, DayTimeField::Minute).unwrap()
            )
        );
        assert!(name_to_type("interval minute to hour").is_err());
    }

    #[test]
    fn unknown_name_is_named_in_error() {
        let err = name_to_type("uuid").unwrap_err();
        assert_eq!(
            err.to_string(),
            "failed to convert the JSON string 'uuid' to a data type"
        );
        assert!(name_to_type("Integer").is_err());
    }

    #[test]
    fn object_key_order_is_irrelevant() {
        let t = decode(json!({"containsNull": false, "type": "array", "elementType": "long"}));
        assert_eq!(t.unwrap(), DataType::array(DataType::Long, false));
    }

    #[test]
    fn extra_or_missing_keys_fail() {
        assert!(decode(json!({"type": "array", "elementType": "long"})).is_err());
        assert!(decode(json!({
            "type": "array", "elementType": "long", "containsNull": true, "extra": 1
        }))
        .is_err());
    }

    #[test]
    fn wrong_value_kinds_fail() {
        let err = decode(json!({"type": "array", "elementType": "long", "containsNull": "yes"}))
            .unwrap_err();
        assert!(matches!(err, DecodeError::UnrecognizedType(s) if s.contains("\"yes\"")));
        assert!(decode(json!({"type": "map", "keyType": "a", "valueType": 1, "valueContainsNull": true})).is_err());
        assert!(decode(json!(42)).is_err());
    }

    #[test]
    fn struct_field_without_metadata() {
        let t = decode(json!({
            "type": "struct",
            "fields": [{"name": "a", "type": "integer", "nullable": true}]
        }))
        .unwrap();
        assert_eq!(
            t,
            DataType::struct_of(vec![StructField::new("a", DataType::Integer, true)])
        );
    }

    #[test]
    fn struct_field_missing_name_or_type() {
        let missing_name = json!({
            "type": "struct",
            "fields": [{"type": "integer", "nullable": true, "metadata": {}}]
        });
        let missing_type = json!({
            "type": "struct",
            "fields": [{"name": "a", "nullable": true, "metadata": {}}]
        });
        assert!(matches!(
            decode(missing_name),
            Err(DecodeError::UnrecognizedField(_))
        ));
        assert!(matches!(
            decode(missing_type),
            Err(DecodeError::UnrecognizedField(_))
        ));
    }

    #[test]
    fn unregistered_native_udt_fails() {
        let err = decode(json!({
            "type": "udt", "class": "geo.PointUDT", "pyClass": null, "sqlType": "string"
        }))
        .unwrap_err();
        assert!(matches!(err, DecodeError::Load { ref class, .. } if class == "geo.PointUDT"));
    }

    #[test]
    fn foreign_udt_wraps_sql_type() {
        let t = decode(json!({
            "type": "udt",
            "pyClass": "geo.PointUDT",
            "serializedClass": "pickle",
            "sqlType": {"type": "array", "elementType": "double", "containsNull": false}
        }))
        .unwrap();
        let DataType::Udt(UserType::Foreign(udt)) = t else {
            panic!("expected foreign udt");
        };
        assert_eq!(udt.py_class, "geo.PointUDT");
        assert_eq!(*udt.sql_type, DataType::array(DataType::Double, false));
    }

    #[test]
    fn invalid_text_is_a_json_error() {
        assert!(matches!(
            from_json_str("{not json", &UdtRegistry::new()),
            Err(DecodeError::Json(_))
        ));
    }
}
