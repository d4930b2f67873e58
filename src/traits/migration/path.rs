use serde::{Deserialize, Serialize};

use crate::lineage::VersionNumber;

/// Metadata about an upgrade, computed without touching the data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MigrationPath {
    /// The anchor: the most senior version the data is exactly compatible with.
    pub from: VersionNumber,
    /// The requested version.
    pub to: VersionNumber,
    /// Versions whose transforms run, oldest first. Empty if no upgrade is needed.
    pub steps: Vec<VersionNumber>,
}

impl MigrationPath {
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
