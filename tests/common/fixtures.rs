use envscribe::{EnvSnapshot, WarningSink};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

/// Schema with a single section holding the given variables.
pub fn schema_with_variables(section: &str, variables: Value) -> Value {
    json!({ "sections": [{ "name": section, "variables": variables }] })
}

/// One "Test" section with `FOO` defaulting to "bar".
pub fn foo_defaulting_to_bar() -> Value {
    schema_with_variables(
        "Test",
        json!([
            { "name": "FOO", "desc": "A variable with a default.", "default": "bar" }
        ]),
    )
}

/// Builds a valid snapshot from string pairs.
pub fn snapshot_of(pairs: &[(&str, &str)]) -> EnvSnapshot {
    EnvSnapshot::new(pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())))
}

/// Warning sink that records every message it receives.
#[derive(Clone, Default)]
pub struct RecordedWarnings(Arc<Mutex<Vec<String>>>);

impl RecordedWarnings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

impl WarningSink for RecordedWarnings {
    fn warn(&self, message: &str) {
        self.0.lock().unwrap().push(message.to_string());
    }
}
