use crate::emission::{decide, EmissionMode};
use crate::snapshot::EnvSnapshot;
use chrono::{DateTime, SecondsFormat, Utc};
use envscribe_layout::{end_banner, paragraphs, section_banner, wrap_paragraph, BLANK_LINE};
use envscribe_schema::Schema;

const DOCUMENT_TITLE: &str = "Project Environment Variables";

const INTRO: &str = "This file contains environment variables for this project. All \
     configurable cross-project values are read from the environment, so a developer \
     or a build system can override any of them with standard tooling.";

const USAGE: &str = "This file belongs at the root of the project and must be named \
     `.env`. Uncomment and modify variable declarations here and they will take \
     effect throughout the build tool chain.";

/// Version and timestamp interpolated into the generated-by line. Explicit
/// inputs, so rendering stays a pure function of its arguments.
#[derive(Debug, Clone)]
pub struct GenerationMeta {
    pub tool_version: String,
    pub generated_at: DateTime<Utc>,
}

impl GenerationMeta {
    fn generated_by_line(&self) -> String {
        format!(
            "Generated by envscribe v{} on {}.",
            self.tool_version,
            self.generated_at.to_rfc3339_opts(SecondsFormat::Millis, true)
        )
    }
}

/// Renders the complete document: title block, then one banner-delimited
/// block per schema section with every variable's description, optional
/// example and default paragraphs, and its assignment line.
///
/// Deterministic for fixed inputs; performs no I/O and never fails.
pub fn render_document(schema: &Schema, snapshot: &EnvSnapshot, meta: &GenerationMeta) -> String {
    let mut out = String::new();

    out.push_str(&section_banner(DOCUMENT_TITLE, 8));
    out.push_str(BLANK_LINE);
    out.push_str(&paragraphs([
        INTRO,
        USAGE,
        meta.generated_by_line().as_str(),
    ]));
    out.push_str(BLANK_LINE);
    out.push_str(&end_banner());

    for section in &schema.sections {
        out.push('\n');
        out.push_str(&section_banner(&section.name, 4));
        out.push_str(BLANK_LINE);
        for variable in &section.variables {
            out.push_str(&wrap_paragraph(&variable.desc));
            if let Some(example) = &variable.example {
                out.push_str(&wrap_paragraph(&format!("- Example: {example}")));
            }
            if let Some(default) = &variable.default {
                out.push_str(&wrap_paragraph(&format!(
                    "- Default when not set: {}",
                    default.doc_text()
                )));
            }
            let emission = decide(variable, snapshot);
            match emission.mode {
                EmissionMode::Live => {
                    out.push_str(&format!("{}={}\n", variable.name, emission.value));
                }
                EmissionMode::Commented => {
                    out.push_str(&format!("#{}={}\n", variable.name, emission.value));
                }
            }
            out.push_str(BLANK_LINE);
        }
        out.push_str(&end_banner());
    }

    out
}
