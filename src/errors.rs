use serde::{Deserialize, Serialize};
use strum::EnumDiscriminants;
use thiserror::Error;

use crate::lineage::VersionNumber;

pub type LineageResult<T> = Result<T, LineageError>;

/// A single schema failure reported by the validator collaborator.
///
/// The engine never interprets these, it only forwards them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaViolation {
    /// JSON pointer to the offending value inside the dataset.
    pub instance_path: String,
    /// JSON pointer to the schema keyword that failed.
    pub schema_path: String,
    pub message: String,
    /// The offending value itself.
    pub instance: serde_json::Value,
}

impl std::fmt::Display for SchemaViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.instance_path.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{}: {}", self.instance_path, self.message)
        }
    }
}

#[derive(Error, Debug, EnumDiscriminants)]
#[strum_discriminants(name(LineageErrorKind), derive(strum::Display, Hash))]
pub enum LineageError {
    #[error("Malformed Version Declaration: {0}")]
    MalformedVersion(String),

    #[error("Validation Error at {version}: {}", summarize(.violations))]
    Validation {
        version: VersionNumber,
        violations: Vec<SchemaViolation>,
    },

    #[error("Lineage Construction Error: {0}")]
    Construction(String),

    #[error("Incomparable Versions: {left} and {right} belong to different lineages")]
    Incomparable { left: String, right: String },

    #[error("Not A Collection: '{collection}' at {version} is not a list of objects")]
    NotACollection {
        version: VersionNumber,
        collection: String,
    },
}

impl LineageError {
    pub fn kind(&self) -> LineageErrorKind {
        self.into()
    }

    /// Schema violations carried by a validation failure, empty otherwise.
    pub fn violations(&self) -> &[SchemaViolation] {
        match self {
            LineageError::Validation { violations, .. } => violations,
            _ => &[],
        }
    }
}

fn summarize(violations: &[SchemaViolation]) -> String {
    match violations {
        [] => "no details".to_string(),
        [only] => only.to_string(),
        [first, rest @ ..] => format!("{} (and {} more)", first, rest.len()),
    }
}
