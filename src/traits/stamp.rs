//! Reading and writing the declared version of a dataset.

use serde_json::{Map, Value, json};

use crate::lineage::VersionNumber;

/// Extracts the declared `{major, minor}` from a dataset and stamps empty
/// datasets with a version.
pub trait VersionStamp: Send + Sync {
    /// The declared version, or `None` if absent or malformed.
    ///
    /// Integral numbers count whatever their JSON spelling, so `3.0` reads
    /// as `3` just as a schema `const` would match it.
    fn read(&self, data: &Value) -> Option<VersionNumber>;

    /// A dataset declaring `version` and holding no collections.
    fn stamp(&self, version: VersionNumber) -> Value;
}

/// Version declared as `{"<field>": {"major": M, "minor": m}}` at the top
/// level of the dataset.
///
/// ```
/// use schema_lineage::traits::stamp::{VersionField, VersionStamp};
/// use schema_lineage::lineage::VersionNumber;
/// use serde_json::json;
///
/// let stamp = VersionField::default();
/// let data = json!({"version": {"major": 4, "minor": 3}});
/// assert_eq!(stamp.read(&data), Some(VersionNumber::new(4, 3)));
/// assert_eq!(stamp.read(&json!({"version": "4.3"})), None);
/// assert_eq!(stamp.stamp(VersionNumber::new(4, 3)), data);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionField {
    field: String,
}

impl VersionField {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }
}

impl Default for VersionField {
    fn default() -> Self {
        Self::new("version")
    }
}

impl VersionStamp for VersionField {
    fn read(&self, data: &Value) -> Option<VersionNumber> {
        let version = data.get(&self.field)?.as_object()?;
        let number = |key: &str| version.get(key).and_then(integral_u32);
        Some(VersionNumber::new(number("major")?, number("minor")?))
    }

    fn stamp(&self, version: VersionNumber) -> Value {
        let mut data = Map::new();
        data.insert(
            self.field.clone(),
            json!({"major": version.major, "minor": version.minor}),
        );
        Value::Object(data)
    }
}

fn integral_u32(value: &Value) -> Option<u32> {
    match value.as_u64() {
        Some(n) => u32::try_from(n).ok(),
        None => {
            let n = value.as_f64()?;
            (n.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(&n)).then_some(n as u32)
        }
    }
}
