//! Version classification, validation and counting.

use log::warn;
use serde_json::Value;

use crate::errors::{LineageError, LineageResult};
use crate::lineage::{Version, VersionNumber};

impl Version {
    /// The version a dataset declares, if it declares one at all.
    pub fn declared_version(&self, data: &Value) -> Option<VersionNumber> {
        self.lineage.stamp.read(data)
    }

    /// Whether the data declares this version's major and a minor no greater
    /// than this version's minor. Does not validate.
    pub fn is_compatible_exactly(&self, data: &Value) -> bool {
        self.declared_version(data).is_some_and(|declared| {
            let own = self.number();
            declared.major == own.major && declared.minor <= own.minor
        })
    }

    /// The newest version, starting from this one and going back through the
    /// lineage, the data is exactly compatible with. Does not validate.
    pub fn get_exactly_compatible(&self, data: &Value) -> Option<Version> {
        self.lineage().find(|version| version.is_compatible_exactly(data))
    }

    /// Whether the data is exactly compatible with this or an older version.
    /// Does not validate.
    pub fn is_compatible(&self, data: &Value) -> bool {
        self.get_exactly_compatible(data).is_some()
    }

    /// Validate the data against this version's schema only.
    pub fn validate_exactly<'d>(&self, data: &'d Value) -> LineageResult<&'d Value> {
        self.descriptor()
            .validator
            .check(data)
            .map_err(|violations| LineageError::Validation {
                version: self.number(),
                violations,
            })?;
        Ok(data)
    }

    pub fn is_valid_exactly(&self, data: &Value) -> bool {
        self.validate_exactly(data).is_ok()
    }

    /// Validate the data against this or an older version's schema.
    ///
    /// The data is checked against the schema of the version it is exactly
    /// compatible with. Data compatible with no version is checked against
    /// this version's schema, so the failure describes what this version
    /// expects.
    pub fn validate<'d>(&self, data: &'d Value) -> LineageResult<&'d Value> {
        match self.get_exactly_compatible(data) {
            Some(version) => version.validate_exactly(data),
            None => self.validate_exactly(data),
        }
    }

    pub fn is_valid(&self, data: &Value) -> bool {
        self.validate(data).is_ok()
    }

    /// A dataset with no objects, declaring this version.
    pub fn new_dataset(&self) -> LineageResult<Value> {
        let data = self.lineage.stamp.stamp(self.number());
        if self.strict() {
            self.validate_exactly(&data)?;
        }
        Ok(data)
    }

    /// Number of objects, of every collection type, in a dataset valid at
    /// this or an older version.
    ///
    /// Validity is the caller's responsibility; it is only re-checked in
    /// strict mode.
    pub fn count(&self, data: &Value) -> LineageResult<usize> {
        if self.strict() {
            self.validate(data)?;
        }
        let version = self.resolve(data)?;
        version.tree().collections().try_fold(0, |total, name| {
            Ok(total + version.collection_len(data, name)?)
        })
    }

    pub(crate) fn strict(&self) -> bool {
        self.lineage.config.strict
    }

    /// The exactly compatible version, or the error explaining why there is
    /// none.
    pub(crate) fn resolve(&self, data: &Value) -> LineageResult<Version> {
        self.get_exactly_compatible(data)
            .ok_or_else(|| self.reject(data))
    }

    /// The failure for data compatible with no version: this version's
    /// schema failure when there is one.
    pub(crate) fn reject(&self, data: &Value) -> LineageError {
        let declared = self.declared_version(data);
        warn!(
            "{self:?}: no compatible version for data declaring {}",
            declared.map_or_else(|| "nothing".to_string(), |n| n.to_string())
        );
        match self.validate_exactly(data) {
            Err(err) => err,
            Ok(_) => LineageError::MalformedVersion(match declared {
                Some(number) => format!("{number} is not in the lineage of {self:?}"),
                None => format!("no parseable version for {self:?}"),
            }),
        }
    }

    fn collection_len(&self, data: &Value, name: &str) -> LineageResult<usize> {
        match data.get(name) {
            None => Ok(0),
            Some(Value::Array(records)) => Ok(records.len()),
            Some(_) => Err(LineageError::NotACollection {
                version: self.number(),
                collection: name.to_string(),
            }),
        }
    }
}
