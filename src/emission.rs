use crate::snapshot::EnvSnapshot;
use envscribe_schema::VariableDefinition;

/// How a variable is written into the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmissionMode {
    /// Active assignment; the line takes effect as written.
    Live,
    /// Disabled assignment documenting the effective default.
    Commented,
}

/// The decided rendering for one variable.
#[derive(Debug, Clone, PartialEq)]
pub struct Emission {
    pub mode: EmissionMode,
    pub value: String,
}

/// Decides whether a variable is emitted live or commented, and with which
/// value. Total over its inputs.
///
/// A line goes live when the user already overrode the default, or when no
/// default exists so the variable must be filled in. A value matching its
/// default stays commented, so later schema default changes still take
/// effect for users who never touched the line.
pub fn decide(variable: &VariableDefinition, snapshot: &EnvSnapshot) -> Emission {
    let current = snapshot.value(&variable.name);
    let is_set = current.is_some();
    let current = current.unwrap_or("");

    let is_set_custom = is_set
        && variable
            .default
            .as_ref()
            .is_none_or(|default| !default.matches(current));
    let is_unset_but_required = !is_set && variable.default.is_none();

    if is_set_custom || is_unset_but_required {
        Emission {
            mode: EmissionMode::Live,
            value: current.to_string(),
        }
    } else {
        Emission {
            mode: EmissionMode::Commented,
            value: variable
                .default
                .as_ref()
                .map(|default| default.assignment_text())
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use envscribe_schema::DefaultValue;

    fn variable(default: Option<DefaultValue>) -> VariableDefinition {
        VariableDefinition {
            name: "FOO".to_string(),
            desc: "A test variable.".to_string(),
            example: None,
            default,
        }
    }

    fn snapshot_with(value: &str) -> EnvSnapshot {
        EnvSnapshot::new([("FOO".to_string(), value.to_string())])
    }

    #[test]
    fn unset_without_default_is_live_and_empty() {
        let emission = decide(&variable(None), &EnvSnapshot::default());
        assert_eq!(emission.mode, EmissionMode::Live);
        assert_eq!(emission.value, "");
    }

    #[test]
    fn unset_with_default_is_commented_with_the_default() {
        let emission = decide(
            &variable(Some(DefaultValue::Text("bar".into()))),
            &EnvSnapshot::default(),
        );
        assert_eq!(emission.mode, EmissionMode::Commented);
        assert_eq!(emission.value, "bar");
    }

    #[test]
    fn set_to_the_default_is_commented() {
        let emission = decide(
            &variable(Some(DefaultValue::Text("bar".into()))),
            &snapshot_with("bar"),
        );
        assert_eq!(emission.mode, EmissionMode::Commented);
        assert_eq!(emission.value, "bar");
    }

    #[test]
    fn set_to_a_custom_value_is_live() {
        let emission = decide(
            &variable(Some(DefaultValue::Text("bar".into()))),
            &snapshot_with("baz"),
        );
        assert_eq!(emission.mode, EmissionMode::Live);
        assert_eq!(emission.value, "baz");
    }

    #[test]
    fn set_without_default_is_live() {
        let emission = decide(&variable(None), &snapshot_with("anything"));
        assert_eq!(emission.mode, EmissionMode::Live);
        assert_eq!(emission.value, "anything");
    }

    #[test]
    fn set_to_empty_string_with_default_is_live() {
        // Presence, not truthiness: an explicit empty string is an override.
        let emission = decide(
            &variable(Some(DefaultValue::Text("bar".into()))),
            &snapshot_with(""),
        );
        assert_eq!(emission.mode, EmissionMode::Live);
        assert_eq!(emission.value, "");
    }

    #[test]
    fn value_spelling_a_non_text_default_never_matches_it() {
        let emission = decide(
            &variable(Some(DefaultValue::Flag(true))),
            &snapshot_with("true"),
        );
        assert_eq!(emission.mode, EmissionMode::Live);
        assert_eq!(emission.value, "true");
    }

    #[test]
    fn falsy_default_commented_value_collapses_to_empty() {
        let emission = decide(
            &variable(Some(DefaultValue::Flag(false))),
            &EnvSnapshot::default(),
        );
        assert_eq!(emission.mode, EmissionMode::Commented);
        assert_eq!(emission.value, "");
    }
}
