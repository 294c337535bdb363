use crate::error::SchemaError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A schema-declared default. The definitions file allows strings, numbers,
/// and booleans here; environment values are always strings, so only a text
/// default can ever compare equal to a live value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DefaultValue {
    Text(String),
    Number(serde_json::Number),
    Flag(bool),
}

impl DefaultValue {
    /// Literal rendering, as shown in the "Default when not set" paragraph.
    pub fn doc_text(&self) -> String {
        match self {
            DefaultValue::Text(text) => text.clone(),
            DefaultValue::Number(number) => number.to_string(),
            DefaultValue::Flag(flag) => flag.to_string(),
        }
    }

    /// Value placed on a disabled assignment line. Empty-ish defaults (empty
    /// string, zero, `false`) collapse to an empty value.
    pub fn assignment_text(&self) -> String {
        if self.is_empty_like() {
            String::new()
        } else {
            self.doc_text()
        }
    }

    /// Whether a live environment value equals this default.
    pub fn matches(&self, env_value: &str) -> bool {
        match self {
            DefaultValue::Text(text) => text == env_value,
            _ => false,
        }
    }

    fn is_empty_like(&self) -> bool {
        match self {
            DefaultValue::Text(text) => text.is_empty(),
            DefaultValue::Number(number) => number.as_f64().is_some_and(|n| n == 0.0),
            DefaultValue::Flag(flag) => !flag,
        }
    }
}

/// One recognized environment variable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariableDefinition {
    /// Unique key, e.g. `BACKEND_URL`.
    pub name: String,
    /// Description shown above the assignment line.
    pub desc: String,
    /// Sample value, rendered as an "Example:" paragraph when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    /// Value the tool chain falls back to when the variable is not set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<DefaultValue>,
}

/// A named, ordered group of variable definitions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    pub name: String,
    pub variables: Vec<VariableDefinition>,
}

/// The full ordered catalogue of recognized variables.
///
/// Invariant: variable names are unique across the entire schema. This is
/// checked at load time, not by the generation core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schema {
    pub sections: Vec<Section>,
}

impl Schema {
    /// Parses and validates a schema from its JSON definition.
    pub fn from_json(json: &str) -> Result<Schema, SchemaError> {
        let schema: Schema = serde_json::from_str(json)?;
        schema.validate()?;
        Ok(schema)
    }

    /// All variables across all sections, in schema order.
    pub fn variables(&self) -> impl Iterator<Item = &VariableDefinition> {
        self.sections
            .iter()
            .flat_map(|section| section.variables.iter())
    }

    fn validate(&self) -> Result<(), SchemaError> {
        let mut seen = HashSet::new();
        for variable in self.variables() {
            if !seen.insert(variable.name.as_str()) {
                return Err(SchemaError::DuplicateName(variable.name.clone()));
            }
            if variable.desc.trim().is_empty() {
                return Err(SchemaError::EmptyDescription(variable.name.clone()));
            }
        }
        Ok(())
    }
}
