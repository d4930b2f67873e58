//! Schema validation collaborator.
//!
//! Schemas are compiled once, when their version joins a lineage, and the
//! resulting validator is reused for every check.

use serde_json::Value;

use crate::errors::SchemaViolation;

/// A compiled schema.
pub trait SchemaValidator: Send + Sync {
    /// Check a dataset, reporting every violation found.
    fn check(&self, data: &Value) -> Result<(), Vec<SchemaViolation>>;
}

/// Turns schema documents into validators.
pub trait SchemaCompiler: Send + Sync {
    /// Compile a schema document. The error is a human readable reason.
    fn compile(&self, schema: &Value) -> Result<Box<dyn SchemaValidator>, String>;
}
