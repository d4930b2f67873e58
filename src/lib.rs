//! # Schema Lineage
//!
//! Versioned schemas for JSON datasets: a linear chain of schema versions and
//! the operations to classify, validate, upgrade, count and merge datasets
//! across it.
//!
//! ## Features
//!
//! - **Linear Lineage**: versions form a single chain, checked once at
//!   construction (strictly increasing majors, own schema and tree per
//!   version)
//! - **Minor Compatibility**: data declaring an older minor of a major is
//!   accepted by that major's version
//! - **Forward Migration**: each version owns one transform from its
//!   predecessor; upgrades replay them one step at a time
//! - **Merging**: datasets at different versions are raised to the newest
//!   one and their collections concatenated
//! - **Copy or In Place**: borrowed inputs are copied, owned inputs reused
//!
//! ## Quick Start
//!
//! ```rust
//! use schema_lineage::prelude::*;
//! use serde_json::{json, Value};
//!
//! fn schema(major: u32, checkout_required: &[&str]) -> Value {
//!     json!({
//!         "type": "object",
//!         "properties": {
//!             "version": {
//!                 "type": "object",
//!                 "properties": {"major": {"const": major}, "minor": {"type": "integer"}},
//!                 "required": ["major", "minor"]
//!             },
//!             "checkouts": {
//!                 "type": "array",
//!                 "items": {"type": "object", "required": checkout_required}
//!             }
//!         },
//!         "required": ["version"]
//!     })
//! }
//!
//! let tree = Tree::new([("", vec!["checkouts"]), ("checkouts", vec![])]);
//! let lineage = Lineage::builder("checkouts")
//!     .version(VersionSpec::root(1, 0, schema(1, &["id"]), tree.clone()))
//!     .version(VersionSpec::new(2, 0, schema(2, &["id", "origin"]), tree, |mut data: Value| {
//!         if let Some(checkouts) = data.get_mut("checkouts").and_then(Value::as_array_mut) {
//!             for checkout in checkouts {
//!                 checkout["origin"] = json!("unknown");
//!             }
//!         }
//!         data["version"] = json!({"major": 2, "minor": 0});
//!         data
//!     }))
//!     .build()?;
//!
//! let v2 = lineage.latest();
//! let old = json!({"version": {"major": 1, "minor": 0}, "checkouts": [{"id": "c1"}]});
//!
//! let new = v2.upgrade(&old)?;
//! assert_eq!(new["checkouts"][0]["origin"], "unknown");
//! assert!(v2.is_valid(&new));
//! assert_eq!(v2.count(&new)?, 1);
//!
//! let merged = v2.merge(&old, [&new])?;
//! assert_eq!(v2.count(&merged)?, 2);
//! # Ok::<(), LineageError>(())
//! ```

pub mod config;
pub mod engine;
pub mod errors;
pub mod lineage;
pub mod prelude;
pub mod schema;
pub mod traits;

pub use errors::{LineageError, LineageResult};
