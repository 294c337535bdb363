// src/error.rs
use envscribe_schema::SchemaError;
use thiserror::Error;

/// Top-level error type for assembling a generator.
///
/// Generation itself is total; only loading a schema and binary-side I/O can
/// fail.
#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("schema failed to load: {0}")]
    Schema(#[from] SchemaError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
