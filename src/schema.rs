//! JSON Schema (draft 7) validation backed by the `jsonschema` crate.

use jsonschema::Validator;
use serde_json::Value;

use crate::errors::SchemaViolation;
use crate::traits::validation::{SchemaCompiler, SchemaValidator};

/// Default [`SchemaCompiler`]: draft 7, optionally checking `format` keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsonSchemaCompiler {
    validate_formats: bool,
}

impl JsonSchemaCompiler {
    pub fn new(validate_formats: bool) -> Self {
        Self { validate_formats }
    }
}

impl Default for JsonSchemaCompiler {
    fn default() -> Self {
        Self::new(true)
    }
}

impl SchemaCompiler for JsonSchemaCompiler {
    fn compile(&self, schema: &Value) -> Result<Box<dyn SchemaValidator>, String> {
        let validator = jsonschema::draft7::options()
            .should_validate_formats(self.validate_formats)
            .build(schema)
            .map_err(|e| e.to_string())?;
        Ok(Box::new(JsonSchemaValidator { validator }))
    }
}

struct JsonSchemaValidator {
    validator: Validator,
}

impl SchemaValidator for JsonSchemaValidator {
    fn check(&self, data: &Value) -> Result<(), Vec<SchemaViolation>> {
        let violations: Vec<SchemaViolation> = self
            .validator
            .iter_errors(data)
            .map(|e| SchemaViolation {
                instance_path: e.instance_path.to_string(),
                schema_path: e.schema_path.to_string(),
                message: e.to_string(),
                instance: e.instance.clone().into_owned(),
            })
            .collect();
        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}
