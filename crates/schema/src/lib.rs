//! Data model for the variable definitions schema.
//!
//! A schema is an ordered sequence of sections, each an ordered list of
//! variable definitions with a description and optional example and default.
//! It is loaded once from a JSON resource and treated as immutable from then
//! on; ordering is significant and preserved in the generated document.

pub mod definitions;
pub mod error;

pub use definitions::{DefaultValue, Schema, Section, VariableDefinition};
pub use error::SchemaError;
