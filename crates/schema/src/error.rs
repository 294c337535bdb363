use thiserror::Error;

/// Errors produced while loading a variable definitions file.
#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("schema is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate variable name `{0}` in schema")]
    DuplicateName(String),

    #[error("variable `{0}` has an empty description")]
    EmptyDescription(String),
}
