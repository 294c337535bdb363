pub mod doc_assertions;
pub mod fixtures;

use chrono::{TimeZone, Utc};
use envscribe::{EnvSnapshot, GeneratorBuilder, Schema};
use serde_json::Value;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Generates a document from a schema JSON value and snapshot with pinned
/// version and timestamp, so test output is fully deterministic.
pub fn generate_with(
    schema: &Value,
    snapshot: EnvSnapshot,
) -> Result<String, Box<dyn std::error::Error>> {
    let schema = Schema::from_json(&schema.to_string())?;
    let generator = GeneratorBuilder::new()
        .with_schema(schema)
        .with_snapshot(snapshot)
        .with_version("0.0.0-test")
        .with_generated_at(Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap())
        .build()?;
    Ok(generator.generate())
}
