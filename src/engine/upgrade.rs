//! Forward migration along the lineage.

use std::borrow::Cow;

use log::debug;
use serde_json::Value;

use crate::errors::{LineageError, LineageResult};
use crate::lineage::Version;
use crate::traits::migration::MigrationPath;

impl Version {
    /// Upgrade a copy of the data to this version from this or any older
    /// version.
    ///
    /// Data already exactly compatible with this version comes back
    /// unchanged. Data compatible with no version fails with this version's
    /// validation error.
    pub fn upgrade(&self, data: &Value) -> LineageResult<Value> {
        self.upgrade_with(Cow::Borrowed(data))
    }

    /// Upgrade the data in place, returning it as is if it already adheres
    /// to this version.
    pub fn upgrade_owned(&self, data: Value) -> LineageResult<Value> {
        self.upgrade_with(Cow::Owned(data))
    }

    /// Upgrade borrowed data on a copy, owned data in place.
    pub fn upgrade_with(&self, data: Cow<'_, Value>) -> LineageResult<Value> {
        let (anchor, newer) = self.split_at_anchor(&data);
        let Some(anchor) = anchor else {
            return Err(self.reject(&data));
        };
        if self.strict() {
            anchor.validate_exactly(&data)?;
        }

        let mut data = data.into_owned();
        if !newer.is_empty() {
            debug!("{self:?}: upgrading data from {anchor} through {} step(s)", newer.len());
        }
        for version in newer {
            let inherit = version.descriptor().inherit.as_ref().ok_or_else(|| {
                LineageError::Construction(format!("{version:?} has no inherit transform"))
            })?;
            data = inherit.inherit(data);
            debug!("{version:?}: inherited data");
            if self.strict() {
                version.validate_exactly(&data)?;
            }
        }
        Ok(data)
    }

    /// The upgrade [`upgrade`](Self::upgrade) would perform, without running
    /// it. `None` if the data is compatible with no version.
    pub fn upgrade_path(&self, data: &Value) -> Option<MigrationPath> {
        let (anchor, newer) = self.split_at_anchor(data);
        anchor.map(|anchor| MigrationPath {
            from: anchor.number(),
            to: self.number(),
            steps: newer.iter().map(Version::number).collect(),
        })
    }

    /// Walk the lineage down to the first exactly compatible version.
    ///
    /// Returns that anchor (if found) and every version visited before it,
    /// oldest first.
    fn split_at_anchor(&self, data: &Value) -> (Option<Version>, Vec<Version>) {
        let mut newer = Vec::new();
        for version in self.lineage() {
            if version.is_compatible_exactly(data) {
                newer.reverse();
                return (Some(version), newer);
            }
            newer.push(version);
        }
        newer.reverse();
        (None, newer)
    }
}
