//! envscribe generates an annotated `.env` document from a schema of
//! recognized environment variables and the current process environment.
//!
//! For every variable in the schema the generator decides between an active
//! assignment (`NAME=value`) and a disabled, documentation-only one
//! (`#NAME=value`), and lays the descriptive text out at a fixed 80-column
//! width with hash banners between sections. The result is returned as one
//! string; writing it anywhere is the caller's business.
//!
//! ```no_run
//! use envscribe::generate_env_file;
//!
//! let contents = generate_env_file()?;
//! print!("{contents}");
//! # Ok::<(), envscribe::GeneratorError>(())
//! ```

pub mod emission;
pub mod error;
pub mod logger;
pub mod pipeline;
pub mod render;
pub mod snapshot;

pub use emission::{decide, Emission, EmissionMode};
pub use error::GeneratorError;
pub use logger::{LogWarnings, WarningSink};
pub use pipeline::{generate_env_file, EnvFileGenerator, GeneratorBuilder};
pub use render::{render_document, GenerationMeta};
pub use snapshot::{EnvSnapshot, ProcessEnv, SnapshotProvider};

pub use envscribe_layout as layout;
pub use envscribe_schema::{DefaultValue, Schema, SchemaError, Section, VariableDefinition};
