//! The version lineage: an ordered chain of immutable schema versions.
//!
//! A [`Lineage`] is built once, oldest version first, through
//! [`LineageBuilder`]. Construction checks the invariants every chain must
//! hold (strictly increasing majors, a distinct schema and a well formed
//! tree per version, an inherit transform on every version but the root)
//! and compiles each schema. After that the lineage never changes and can be
//! shared freely between threads.

mod descriptor;
mod tree;
mod version;

use std::sync::Arc;

use log::debug;

pub use descriptor::VersionSpec;
pub use tree::Tree;
pub use version::{Ancestors, Version, VersionNumber};

use crate::config::LineageConfig;
use crate::errors::{LineageError, LineageResult};
use crate::schema::JsonSchemaCompiler;
use crate::traits::stamp::{VersionField, VersionStamp};
use crate::traits::validation::SchemaCompiler;
use descriptor::VersionDescriptor;

pub(crate) struct LineageInner {
    pub(crate) name: String,
    pub(crate) versions: Vec<VersionDescriptor>,
    pub(crate) stamp: Box<dyn VersionStamp>,
    pub(crate) config: LineageConfig,
}

/// A linear chain of schema versions.
#[derive(Clone)]
pub struct Lineage {
    inner: Arc<LineageInner>,
}

impl Lineage {
    pub fn builder(name: impl Into<String>) -> LineageBuilder {
        LineageBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    pub fn config(&self) -> &LineageConfig {
        &self.inner.config
    }

    /// Number of versions. Never zero.
    pub fn len(&self) -> usize {
        self.inner.versions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.versions.is_empty()
    }

    fn at(&self, index: usize) -> Version {
        Version {
            lineage: Arc::clone(&self.inner),
            index,
        }
    }

    pub fn latest(&self) -> Version {
        self.at(self.len() - 1)
    }

    pub fn oldest(&self) -> Version {
        self.at(0)
    }

    /// The version with the given major number.
    pub fn get(&self, major: u32) -> Option<Version> {
        self.inner
            .versions
            .iter()
            .position(|v| v.number.major == major)
            .map(|index| self.at(index))
    }

    /// The version with exactly this major and minor number.
    pub fn find(&self, number: VersionNumber) -> Option<Version> {
        self.get(number.major)
            .filter(|version| version.number() == number)
    }

    /// Every version, oldest first.
    pub fn versions(&self) -> impl DoubleEndedIterator<Item = Version> + ExactSizeIterator + '_ {
        (0..self.len()).map(|index| self.at(index))
    }
}

impl std::fmt::Debug for Lineage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lineage")
            .field("name", &self.inner.name)
            .field(
                "versions",
                &self
                    .inner
                    .versions
                    .iter()
                    .map(|v| v.number)
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// Collects versions, oldest first, and validates them into a [`Lineage`].
///
/// ```
/// use schema_lineage::prelude::*;
/// use serde_json::json;
///
/// let tree = Tree::new([("", vec!["checkouts"]), ("checkouts", vec![])]);
/// let result = Lineage::builder("broken")
///     .version(VersionSpec::root(2, 0, json!({"type": "object"}), tree.clone()))
///     .version(VersionSpec::new(1, 0, json!({"type": "object", "title": "v1"}), tree, |d: serde_json::Value| d))
///     .build();
///
/// assert!(matches!(result, Err(LineageError::Construction(_))));
/// ```
pub struct LineageBuilder {
    name: String,
    config: LineageConfig,
    stamp: Option<Box<dyn VersionStamp>>,
    compiler: Option<Box<dyn SchemaCompiler>>,
    specs: Vec<VersionSpec>,
}

impl LineageBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            config: LineageConfig::default(),
            stamp: None,
            compiler: None,
            specs: Vec::new(),
        }
    }

    pub fn config(mut self, config: LineageConfig) -> Self {
        self.config = config;
        self
    }

    /// Override how versions are read from and written to datasets.
    /// Defaults to [`VersionField`] on the configured field.
    pub fn stamp(mut self, stamp: impl VersionStamp + 'static) -> Self {
        self.stamp = Some(Box::new(stamp));
        self
    }

    /// Override how schema documents are compiled.
    /// Defaults to [`JsonSchemaCompiler`].
    pub fn compiler(mut self, compiler: impl SchemaCompiler + 'static) -> Self {
        self.compiler = Some(Box::new(compiler));
        self
    }

    /// Append the next (newer) version.
    pub fn version(mut self, spec: VersionSpec) -> Self {
        self.specs.push(spec);
        self
    }

    pub fn versions(mut self, specs: impl IntoIterator<Item = VersionSpec>) -> Self {
        self.specs.extend(specs);
        self
    }

    pub fn build(self) -> LineageResult<Lineage> {
        let LineageBuilder {
            name,
            config,
            stamp,
            compiler,
            specs,
        } = self;

        if specs.is_empty() {
            return Err(construction(&name, "lineage has no versions"));
        }

        let compiler: Box<dyn SchemaCompiler> = compiler
            .unwrap_or_else(|| Box::new(JsonSchemaCompiler::new(config.validate_formats)));
        let stamp: Box<dyn VersionStamp> =
            stamp.unwrap_or_else(|| Box::new(VersionField::new(config.version_field.clone())));

        let mut versions: Vec<VersionDescriptor> = Vec::with_capacity(specs.len());
        for spec in specs {
            check_spec(&name, versions.last(), &spec)?;
            let validator = compiler.compile(&spec.schema).map_err(|reason| {
                construction(&name, format!("{} has an invalid schema: {reason}", spec.number))
            })?;
            debug!("Lineage {name}: registered {}", spec.number);
            versions.push(VersionDescriptor::new(spec, validator));
        }

        Ok(Lineage {
            inner: Arc::new(LineageInner {
                name,
                versions,
                stamp,
                config,
            }),
        })
    }
}

fn construction(name: &str, reason: impl std::fmt::Display) -> LineageError {
    LineageError::Construction(format!("{name}: {reason}"))
}

fn check_spec(
    name: &str,
    previous: Option<&VersionDescriptor>,
    spec: &VersionSpec,
) -> LineageResult<()> {
    let number = spec.number;

    if !spec.schema.is_object() {
        return Err(construction(name, format!("{number} schema is not an object")));
    }
    spec.tree
        .check()
        .map_err(|reason| construction(name, format!("{number} tree is malformed: {reason}")))?;

    match previous {
        None => {
            if spec.inherit.is_some() {
                return Err(construction(
                    name,
                    format!("{number} is the root version and cannot inherit"),
                ));
            }
        }
        Some(previous) => {
            if number.major <= previous.number.major {
                return Err(construction(
                    name,
                    format!(
                        "{number} major is not greater than its predecessor's ({})",
                        previous.number
                    ),
                ));
            }
            if spec.schema == previous.schema {
                return Err(construction(
                    name,
                    format!("{number} reuses the schema of {}", previous.number),
                ));
            }
            if spec.inherit.is_none() {
                return Err(construction(
                    name,
                    format!("{number} has no inherit transform"),
                ));
            }
        }
    }

    Ok(())
}
