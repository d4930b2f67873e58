//! Dataset operations over a lineage.
//!
//! Everything here is a method on [`Version`](crate::lineage::Version), the
//! version the caller works "from": classification looks at that version
//! and its ancestors, upgrades and merges move data towards it.
//!
//! | Operation | Mutates input | Result |
//! |-----------|---------------|--------|
//! | [`new_dataset`](crate::lineage::Version::new_dataset) | - | empty dataset at the version |
//! | [`validate`](crate::lineage::Version::validate) | no | the data, or the schema failure |
//! | [`count`](crate::lineage::Version::count) | no | number of objects |
//! | [`upgrade`](crate::lineage::Version::upgrade) | no (`upgrade_owned`: yes) | data at the version |
//! | [`merge`](crate::lineage::Version::merge) | no (`merge_owned`: yes) | data at the newest input version |
//!
//! Set [`LineageConfig::strict`](crate::config::LineageConfig::strict) to
//! re-validate inputs, intermediate upgrade steps and merge results.

mod classify;
mod merge;
mod upgrade;
