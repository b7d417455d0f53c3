//! coltype CLI: inspect, compare, and fingerprint persisted schemas.

use clap::{Parser, Subcommand, ValueEnum};
use coltype_core::config::TypeConfig;
use coltype_core::{
    equals_compatible_with, equals_structurally, equals_structurally_by_name, DataType,
    Fingerprint,
};
use coltype_ddl::{parse_type_with_fallback, ParseError};
use coltype_json::{
    fingerprint, from_json_str, name_to_type, to_pretty_json, DecodeError, UdtRegistry,
};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "coltype")]
#[command(about = "Inspect, compare, and fingerprint persisted column type schemas", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a persisted schema and print its textual forms
    Inspect {
        /// Path to the schema JSON file
        #[arg(short, long)]
        schema: PathBuf,

        /// Struct field budget for the simple string (overrides config)
        #[arg(long)]
        max_fields: Option<usize>,
    },

    /// Compare two persisted schemas
    Compare {
        /// Schema data is read from
        #[arg(short, long)]
        left: PathBuf,

        /// Schema data is written to
        #[arg(short, long)]
        right: PathBuf,

        #[arg(long, value_enum, default_value_t = CompareMode::Compatible)]
        mode: CompareMode,

        /// Skip nullability checks (structural mode)
        #[arg(long)]
        ignore_nullability: bool,

        /// Skip field-name checks (compatible mode)
        #[arg(long)]
        ignore_name: bool,

        /// Compare field names case-sensitively (overrides config)
        #[arg(long)]
        case_sensitive: bool,
    },

    /// Print the stable fingerprint of a persisted schema
    Fingerprint {
        #[arg(short, long)]
        schema: PathBuf,

        /// Expected fingerprint (64 hex digits); exit 2 on drift
        #[arg(long)]
        expect: Option<String>,
    },

    /// Parse a type name, falling back to a JSON schema document
    Parse {
        /// Type text, e.g. `decimal(10,2)` or a JSON schema
        text: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum CompareMode {
    /// Right may be more permissive about nulls than left
    Compatible,
    /// Same shape; names ignored
    Structural,
    /// Same field-name skeleton
    ByName,
    /// Same type modulo nullability
    SameType,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = TypeConfig::from_env();

    match cli.command {
        Commands::Inspect { schema, max_fields } => {
            if let Some(max) = max_fields {
                config.max_to_string_fields = max;
            }
            config.validate()?;
            let data_type = read_schema(&schema)?;
            println!("Simple:  {}", config.simple_string(&data_type));
            println!("Catalog: {}", data_type.catalog_string());
            println!("SQL:     {}", data_type.sql());
            println!("Size:    {} bytes", data_type.default_size());
        }
        Commands::Compare {
            left,
            right,
            mode,
            ignore_nullability,
            ignore_name,
            case_sensitive,
        } => {
            if case_sensitive {
                config.case_sensitive = true;
            }
            let left = read_schema(&left)?;
            let right = read_schema(&right)?;
            let options = CompareOptions {
                mode,
                ignore_nullability,
                ignore_name,
            };
            if compare_types(&left, &right, options, &config) {
                println!("✓ Schemas match ({:?})", mode);
            } else {
                println!("✗ Schemas differ ({:?})", mode);
                std::process::exit(2);
            }
        }
        Commands::Fingerprint { schema, expect } => {
            let data_type = read_schema(&schema)?;
            let actual = fingerprint(&data_type);
            match expect {
                None => println!("{}", actual),
                Some(expected) => {
                    let expected: Fingerprint = expected.parse()?;
                    if !check_fingerprint(actual, expected) {
                        println!("✗ Schema drifted: {} != {}", actual.short(), expected.short());
                        std::process::exit(2);
                    }
                    println!("✓ Schema unchanged ({})", actual.short());
                }
            }
        }
        Commands::Parse { text } => {
            let data_type = parse_text(&text)?;
            println!("{}", to_pretty_json(&data_type));
        }
    }

    Ok(())
}

fn read_schema(path: &PathBuf) -> Result<DataType, Box<dyn std::error::Error>> {
    let text = fs::read_to_string(path)?;
    tracing::debug!(path = %path.display(), bytes = text.len(), "decoding schema");
    // No native UDTs are registered in the CLI.
    Ok(from_json_str(&text, &UdtRegistry::new())?)
}

#[derive(Debug, Clone, Copy)]
struct CompareOptions {
    mode: CompareMode,
    ignore_nullability: bool,
    ignore_name: bool,
}

fn compare_types(
    left: &DataType,
    right: &DataType,
    options: CompareOptions,
    config: &TypeConfig,
) -> bool {
    match options.mode {
        CompareMode::Compatible => equals_compatible_with(left, right, options.ignore_name),
        CompareMode::Structural => equals_structurally(left, right, options.ignore_nullability),
        CompareMode::ByName => equals_structurally_by_name(left, right, &config.resolver()),
        CompareMode::SameType => config.same_type(left, right),
    }
}

fn check_fingerprint(actual: Fingerprint, expected: Fingerprint) -> bool {
    if actual != expected {
        tracing::warn!(%actual, %expected, "schema fingerprint mismatch");
        return false;
    }
    true
}

/// Canonical names first; whole JSON documents as the fallback.
fn parse_text(text: &str) -> Result<DataType, ParseError> {
    let primary = |t: &str| name_to_type(t.trim()).map_err(|e| decode_to_parse(t, e));
    let fallback = |t: &str| {
        from_json_str(t, &UdtRegistry::new()).map_err(|e| decode_to_parse(t, e))
    };
    parse_type_with_fallback(text, &primary, &fallback)
}

fn decode_to_parse(text: &str, err: DecodeError) -> ParseError {
    match err {
        DecodeError::Core(e) => ParseError::from(e),
        other => ParseError::syntax(text, other.to_string()),
    }
}
