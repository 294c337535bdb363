// src/pipeline.rs

use crate::error::GeneratorError;
use crate::logger::{LogWarnings, WarningSink};
use crate::render::{render_document, GenerationMeta};
use crate::snapshot::{EnvSnapshot, ProcessEnv, SnapshotProvider};
use chrono::{DateTime, Utc};
use envscribe_schema::Schema;
use log::debug;

/// The bundled variable definitions, compiled into the binary.
const VARIABLE_DEFINITIONS: &str = include_str!("../variable_definitions.json");

/// Fixed warning emitted when the captured snapshot is invalid.
const INVALID_ENV_WARNING: &str = "The current environment is not yet valid; edit \
    the generated .env file and provide the missing variables to build the project.";

/// A builder for creating an [`EnvFileGenerator`].
pub struct GeneratorBuilder {
    schema: Option<Schema>,
    provider: Box<dyn SnapshotProvider>,
    logger: Box<dyn WarningSink>,
    tool_version: String,
    generated_at: Option<DateTime<Utc>>,
}

impl Default for GeneratorBuilder {
    fn default() -> Self {
        GeneratorBuilder {
            schema: None,
            provider: Box::new(ProcessEnv),
            logger: Box::new(LogWarnings),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            generated_at: None,
        }
    }
}

impl GeneratorBuilder {
    /// Creates a builder with the default collaborators: the bundled schema,
    /// the live process environment, and `log`-backed warnings.
    pub fn new() -> Self {
        Default::default()
    }

    /// Replaces the bundled schema.
    pub fn with_schema(mut self, schema: Schema) -> Self {
        self.schema = Some(schema);
        self
    }

    /// Replaces the bundled schema with one parsed from JSON.
    pub fn with_schema_json(self, json: &str) -> Result<Self, GeneratorError> {
        Ok(self.with_schema(Schema::from_json(json)?))
    }

    /// Replaces the snapshot source.
    pub fn with_provider<P: SnapshotProvider + 'static>(mut self, provider: P) -> Self {
        self.provider = Box::new(provider);
        self
    }

    /// Uses a pre-built snapshot as-is, validity verdict included.
    pub fn with_snapshot(self, snapshot: EnvSnapshot) -> Self {
        self.with_provider(snapshot)
    }

    /// Replaces the warning sink.
    pub fn with_logger<L: WarningSink + 'static>(mut self, logger: L) -> Self {
        self.logger = Box::new(logger);
        self
    }

    /// Overrides the version interpolated into the generated-by line.
    pub fn with_version(mut self, version: &str) -> Self {
        self.tool_version = version.to_string();
        self
    }

    /// Pins the generation timestamp instead of capturing it at render start.
    pub fn with_generated_at(mut self, at: DateTime<Utc>) -> Self {
        self.generated_at = Some(at);
        self
    }

    pub fn build(self) -> Result<EnvFileGenerator, GeneratorError> {
        let schema = match self.schema {
            Some(schema) => schema,
            None => Schema::from_json(VARIABLE_DEFINITIONS)?,
        };
        Ok(EnvFileGenerator {
            schema,
            provider: self.provider,
            logger: self.logger,
            tool_version: self.tool_version,
            generated_at: self.generated_at,
        })
    }
}

/// Generates the annotated `.env` document.
pub struct EnvFileGenerator {
    schema: Schema,
    provider: Box<dyn SnapshotProvider>,
    logger: Box<dyn WarningSink>,
    tool_version: String,
    generated_at: Option<DateTime<Utc>>,
}

impl EnvFileGenerator {
    /// Captures a snapshot, warns once if it is invalid, and renders the
    /// document. Rendering proceeds regardless of validity so that unset
    /// required variables stay visible as empty active assignments.
    pub fn generate(&self) -> String {
        let snapshot = self.provider.capture(&self.schema);
        if let Some(reason) = snapshot.error() {
            debug!("environment snapshot flagged invalid: {reason}");
            self.logger.warn(INVALID_ENV_WARNING);
        }
        let meta = GenerationMeta {
            tool_version: self.tool_version.clone(),
            generated_at: self.generated_at.unwrap_or_else(Utc::now),
        };
        render_document(&self.schema, &snapshot, &meta)
    }
}

/// Generates the document with every collaborator defaulted: bundled schema,
/// live process environment, warnings through the `log` facade.
pub fn generate_env_file() -> Result<String, GeneratorError> {
    Ok(GeneratorBuilder::new().build()?.generate())
}
