//! Comparator properties over realistic nested schemas.


use coltype_core::{
    case_insensitive_resolution, case_sensitive_resolution, equals_compatible,
    equals_compatible_with, equals_structurally, equals_structurally_by_name, DataType,
    ForeignUdt, StructField, TypeConfig, UserType,
};
use test_data_gen::{generate_wide_schema, pair, PointUdt};

fn foreign_points() -> DataType {
    let repr = DataType::array(
        DataType::struct_of(vec![StructField::new("x", DataType::Double, false)]),
        false,
    );
    DataType::Udt(UserType::Foreign(ForeignUdt::new(
        repr,
        "geo.point.PointsUDT",
        "pickled",
    )))
}

fn native_point() -> DataType {
    DataType::Udt(UserType::native(PointUdt::new()))
}

fn samples() -> Vec<DataType> {
    vec![
        DataType::Integer,
        DataType::array(DataType::Integer, false),
        DataType::array(DataType::array(DataType::String, true), false),
        DataType::map(DataType::String, DataType::Long, false),
        pair("a", "b", DataType::Double, false),
        generate_wide_schema(),
        foreign_points(),
        native_point(),
        DataType::struct_of(vec![
            StructField::new("route", foreign_points(), false),
            StructField::new("origin", native_point(), true),
        ]),
        DataType::Udt(UserType::Foreign(ForeignUdt::new(
            DataType::String,
            "acme.Label",
            "pickled",
        ))),
    ]
}

fn fully_permissive(t: &DataType) -> bool {
    !t.exists_recursively(|node| match node {
        DataType::Array(a) => !a.contains_null,
        DataType::Map(m) => !m.value_contains_null,
        DataType::Struct(s) => s.iter().any(|f| !f.nullable),
        _ => false,
    })
}

#[test]
fn test_as_nullable_is_idempotent() {
    for t in samples() {
        let once = t.as_nullable();
        assert_eq!(once.as_nullable(), once, "not idempotent for {t}");
        assert!(fully_permissive(&once));
    }
}

#[test]
fn test_compatible_with_nullable_projection() {
    for t in samples() {
        let loose = t.as_nullable();
        assert!(equals_compatible(&t, &loose), "{t} should widen");
        assert_eq!(
            equals_compatible(&loose, &t),
            fully_permissive(&t),
            "reverse direction for {t}"
        );
    }
}

#[test]
fn test_array_nullability_edge_case() {
    let strict = DataType::array(DataType::Integer, false);
    let loose = DataType::array(DataType::Integer, true);
    assert!(equals_compatible(&strict, &loose));
    assert!(!equals_compatible(&loose, &strict));
}

#[test]
fn test_rename_breaks_compatibility_not_shape() {
    let original = pair("a", "b", DataType::Long, true);
    let renamed = pair("a", "c", DataType::Long, true);
    assert!(equals_structurally(&original, &renamed, false));
    assert!(!equals_compatible(&original, &renamed));
    assert!(equals_compatible_with(&original, &renamed, true));
}

#[test]
fn test_field_order_matters() {
    let ab = DataType::struct_of(vec![
        StructField::new("a", DataType::Long, true),
        StructField::new("b", DataType::String, true),
    ]);
    let ba = DataType::struct_of(vec![
        StructField::new("b", DataType::String, true),
        StructField::new("a", DataType::Long, true),
    ]);
    assert!(!equals_compatible(&ab, &ba));
    assert!(!equals_structurally(&ab, &ba, true));
    assert!(!equals_structurally_by_name(&ab, &ba, &case_sensitive_resolution));
}

#[test]
fn test_structural_nullability_toggle() {
    let schema = generate_wide_schema();
    let loose = schema.as_nullable();
    assert!(!equals_structurally(&schema, &loose, false));
    assert!(equals_structurally(&schema, &loose, true));
}

// Name-skeleton comparison deliberately ignores leaf types.
#[test]
fn test_by_name_ignores_leaf_types() {
    let strings = pair("a", "b", DataType::String, true);
    let ints = pair("a", "b", DataType::Integer, false);
    assert!(equals_structurally_by_name(&strings, &ints, &case_sensitive_resolution));
    assert!(!equals_structurally(&strings, &ints, true));
}

#[test]
fn test_by_name_with_configured_resolver() {
    let lower = pair("user_id", "email", DataType::String, true);
    let upper = pair("USER_ID", "EMAIL", DataType::String, true);
    assert!(equals_structurally_by_name(&lower, &upper, &case_insensitive_resolution));

    let sensitive = TypeConfig {
        case_sensitive: true,
        ..Default::default()
    };
    assert!(!equals_structurally_by_name(&lower, &upper, &sensitive.resolver()));
    assert!(equals_structurally_by_name(
        &lower,
        &upper,
        &TypeConfig::default().resolver()
    ));
}

#[test]
fn test_nested_struct_names_checked_recursively() {
    let inner_a = pair("x", "y", DataType::Double, false);
    let inner_b = pair("x", "z", DataType::Double, false);
    let outer_a = DataType::map(DataType::String, DataType::array(inner_a, false), false);
    let outer_b = DataType::map(DataType::String, DataType::array(inner_b, false), false);
    assert!(!equals_compatible(&outer_a, &outer_b));
    assert!(!equals_structurally_by_name(&outer_a, &outer_b, &case_sensitive_resolution));
    assert!(equals_structurally(&outer_a, &outer_b, false));
}

#[test]
fn test_udt_representation_is_part_of_the_tree() {
    let t = foreign_points();
    assert!(t.exists_recursively(|node| *node == DataType::Double));
    assert!(!fully_permissive(&t));
    assert!(!fully_permissive(&native_point()));

    let loose = t.as_nullable();
    assert_ne!(loose, t);
    assert!(fully_permissive(&loose));
    assert!(equals_compatible(&t, &loose));
    assert!(!equals_compatible(&loose, &t));
}

#[test]
fn test_udts_with_different_identifiers_never_match() {
    let a = foreign_points();
    let DataType::Udt(UserType::Foreign(udt)) = &a else {
        panic!("expected foreign udt");
    };
    let b = DataType::Udt(UserType::Foreign(ForeignUdt::new(
        (*udt.sql_type).clone(),
        "geo.point.OtherUDT",
        "pickled",
    )));
    assert!(!equals_compatible(&a, &b));
    assert!(!equals_structurally(&a, &b, true));
    assert!(!equals_compatible(&a, &native_point()));
}

#[test]
fn test_by_name_requires_matching_composite_kinds() {
    let arr = DataType::array(DataType::Integer, true);
    let map = DataType::map(DataType::Integer, DataType::Integer, true);
    let single = DataType::struct_of(vec![StructField::new("a", DataType::Integer, true)]);
    let cs = &case_sensitive_resolution;
    assert!(!equals_structurally_by_name(&arr, &single, cs));
    assert!(!equals_structurally_by_name(&arr, &map, cs));
    assert!(!equals_structurally_by_name(&single, &DataType::Integer, cs));

    let nested_arr = pair("a", "b", arr, true);
    let nested_st = pair("a", "b", single, true);
    assert!(!equals_structurally_by_name(&nested_arr, &nested_st, cs));
}
