use envscribe_schema::Schema;
use std::collections::BTreeMap;

/// Current runtime values for environment variables, with presence
/// distinguishable from absence (a variable may be set to the empty string),
/// plus an overall validity verdict from whoever captured it.
#[derive(Debug, Clone, Default)]
pub struct EnvSnapshot {
    values: BTreeMap<String, String>,
    error: Option<String>,
}

impl EnvSnapshot {
    /// Builds a snapshot from name/value pairs. The snapshot starts out
    /// valid; see [`EnvSnapshot::validated_against`].
    pub fn new(values: impl IntoIterator<Item = (String, String)>) -> Self {
        EnvSnapshot {
            values: values.into_iter().collect(),
            error: None,
        }
    }

    /// Flags the snapshot invalid when a variable without a default is
    /// absent, recording the missing names as the reason.
    pub fn validated_against(mut self, schema: &Schema) -> Self {
        let missing: Vec<&str> = schema
            .variables()
            .filter(|variable| variable.default.is_none() && !self.is_set(&variable.name))
            .map(|variable| variable.name.as_str())
            .collect();
        if !missing.is_empty() {
            self.error = Some(format!("missing required variables: {}", missing.join(", ")));
        }
        self
    }

    /// Flags the snapshot invalid with an externally supplied reason.
    pub fn with_error(mut self, reason: impl Into<String>) -> Self {
        self.error = Some(reason.into());
        self
    }

    /// Presence test. An explicitly set empty string counts as set.
    pub fn is_set(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Why the snapshot was flagged invalid, if it was.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

/// Source of the environment snapshot a generation runs against.
pub trait SnapshotProvider {
    fn capture(&self, schema: &Schema) -> EnvSnapshot;
}

/// Captures the live process environment, validated against the schema.
#[derive(Debug, Default)]
pub struct ProcessEnv;

impl SnapshotProvider for ProcessEnv {
    fn capture(&self, schema: &Schema) -> EnvSnapshot {
        EnvSnapshot::new(std::env::vars()).validated_against(schema)
    }
}

/// A pre-built snapshot passes through unchanged, verdict included.
impl SnapshotProvider for EnvSnapshot {
    fn capture(&self, _schema: &Schema) -> EnvSnapshot {
        self.clone()
    }
}
