//! Prelude module for convenient imports.
//!
//! ```rust
//! use schema_lineage::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - [`Lineage`], [`LineageBuilder`], [`VersionSpec`]: building a lineage
//! - [`Version`], [`VersionNumber`], [`Tree`]: inspecting versions
//! - [`Inherit`], [`MigrationPath`]: defining and previewing upgrades
//! - [`LineageConfig`]: strict checks and collaborator defaults
//! - [`LineageError`], [`LineageResult`]: error handling
//!
//! Collaborator traits ([`VersionStamp`](crate::traits::VersionStamp),
//! [`SchemaCompiler`](crate::traits::SchemaCompiler)) are not included; import
//! them from [`traits`](crate::traits) when replacing the defaults.

pub use crate::config::LineageConfig;
pub use crate::errors::{LineageError, LineageErrorKind, LineageResult, SchemaViolation};
pub use crate::lineage::{Lineage, LineageBuilder, Tree, Version, VersionNumber, VersionSpec};
pub use crate::traits::migration::{Inherit, MigrationPath};
