//! Migration traits for versioned dataset evolution.
//!
//! Each version of a lineage implements [`Inherit`] to define the upgrade
//! path from its predecessor. The engine chains these transforms when a
//! dataset is several versions behind, and [`MigrationPath`] describes such a
//! chain before it runs.
//!
//! # Example
//!
//! ```rust
//! use schema_lineage::prelude::*;
//! use serde_json::{json, Value};
//!
//! fn tree(collections: &[&str]) -> Tree {
//!     let mut entries = vec![(String::new(), collections.iter().map(|c| c.to_string()).collect())];
//!     entries.extend(collections.iter().map(|c| (c.to_string(), Vec::new())));
//!     Tree::new(entries)
//! }
//!
//! let lineage = Lineage::builder("checkouts")
//!     .version(VersionSpec::root(
//!         1,
//!         0,
//!         json!({"type": "object", "required": ["version"]}),
//!         tree(&["checkouts"]),
//!     ))
//!     .version(VersionSpec::new(
//!         2,
//!         0,
//!         json!({"type": "object", "required": ["version", "checkouts"]}),
//!         tree(&["checkouts"]),
//!         |mut data: Value| {
//!             data["version"] = json!({"major": 2, "minor": 0});
//!             if data.get("checkouts").is_none() {
//!                 data["checkouts"] = json!([]);
//!             }
//!             data
//!         },
//!     ))
//!     .build()
//!     .unwrap();
//!
//! let latest = lineage.latest();
//! let old = json!({"version": {"major": 1, "minor": 0}});
//! let path = latest.upgrade_path(&old).unwrap();
//! assert_eq!(path.steps, vec![VersionNumber::new(2, 0)]);
//!
//! let new = latest.upgrade(&old).unwrap();
//! assert_eq!(new["checkouts"], json!([]));
//! ```

mod path;
mod traits;

pub use path::*;
pub use traits::*;
