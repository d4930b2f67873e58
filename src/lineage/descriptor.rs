use serde_json::Value;

use super::{Tree, VersionNumber};
use crate::traits::migration::Inherit;
use crate::traits::validation::SchemaValidator;

/// Everything needed to add one version to a lineage.
///
/// Versions are added oldest first; the first one added is the lineage
/// root and is the only one without an inherit transform.
pub struct VersionSpec {
    pub(crate) number: VersionNumber,
    pub(crate) schema: Value,
    pub(crate) tree: Tree,
    pub(crate) inherit: Option<Box<dyn Inherit>>,
}

impl VersionSpec {
    /// The oldest version of a lineage.
    pub fn root(major: u32, minor: u32, schema: Value, tree: Tree) -> Self {
        Self {
            number: VersionNumber::new(major, minor),
            schema,
            tree,
            inherit: None,
        }
    }

    /// A version converting its predecessor's data with `inherit`.
    pub fn new(
        major: u32,
        minor: u32,
        schema: Value,
        tree: Tree,
        inherit: impl Inherit + 'static,
    ) -> Self {
        Self {
            number: VersionNumber::new(major, minor),
            schema,
            tree,
            inherit: Some(Box::new(inherit)),
        }
    }

    /// Attach (or replace) the inherit transform.
    pub fn with_inherit(mut self, inherit: impl Inherit + 'static) -> Self {
        self.inherit = Some(Box::new(inherit));
        self
    }

    pub fn number(&self) -> VersionNumber {
        self.number
    }
}

impl std::fmt::Debug for VersionSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VersionSpec")
            .field("number", &self.number)
            .field("tree", &self.tree)
            .field("inherit", &self.inherit.is_some())
            .finish_non_exhaustive()
    }
}

/// An immutable, validated version as stored in a lineage.
pub(crate) struct VersionDescriptor {
    pub(crate) number: VersionNumber,
    pub(crate) schema: Value,
    pub(crate) tree: Tree,
    pub(crate) inherit: Option<Box<dyn Inherit>>,
    pub(crate) validator: Box<dyn SchemaValidator>,
}

impl VersionDescriptor {
    pub(crate) fn new(spec: VersionSpec, validator: Box<dyn SchemaValidator>) -> Self {
        Self {
            number: spec.number,
            schema: spec.schema,
            tree: spec.tree,
            inherit: spec.inherit,
            validator,
        }
    }
}
