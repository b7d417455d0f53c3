use coltype_core::{equals_compatible, equals_structurally, DataType, StructField};
use coltype_json::{from_json, to_json, UdtRegistry};
use criterion::{criterion_group, criterion_main, Criterion};

fn make_schema(columns: usize) -> DataType {
    let fields = (0..columns)
        .map(|i| {
            let data_type = match i % 4 {
                0 => DataType::Long,
                1 => DataType::array(DataType::String, i % 3 == 0),
                2 => DataType::map(DataType::String, DataType::Double, true),
                _ => DataType::struct_of(vec![
                    StructField::new("lat", DataType::Double, false),
                    StructField::new("lon", DataType::Double, false),
                ]),
            };
            StructField::new(format!("col_{i}"), data_type, i % 2 == 0)
        })
        .collect();
    DataType::struct_of(fields)
}

fn bench_codec(c: &mut Criterion) {
    let schema = make_schema(256);
    let json = to_json(&schema);
    let registry = UdtRegistry::new();
    c.bench_function("encode_256_columns", |b| b.iter(|| to_json(&schema)));
    c.bench_function("decode_256_columns", |b| {
        b.iter(|| from_json(&json, &registry).unwrap())
    });
}

fn bench_compare(c: &mut Criterion) {
    let schema = make_schema(256);
    let nullable = schema.as_nullable();
    c.bench_function("equals_compatible_256_columns", |b| {
        b.iter(|| equals_compatible(&schema, &nullable))
    });
    c.bench_function("equals_structurally_256_columns", |b| {
        b.iter(|| equals_structurally(&schema, &nullable, true))
    });
}

criterion_group!(schemas, bench_codec, bench_compare);
criterion_main!(schemas);
