//! Core migration trait for per-version data conversion.

use serde_json::Value;

/// Converts a dataset valid at the previous version into one valid at the
/// version owning the transform.
///
/// Every non-root version of a lineage owns exactly one transform. The engine
/// chains them when upgrading across several versions, always one step at a
/// time and always oldest first, so an implementation only ever needs to
/// understand its immediate predecessor's shape.
///
/// Transforms must be total over predecessor-valid input: they cannot fail.
/// Any closure `Fn(Value) -> Value` is a transform.
///
/// # Example
///
/// ```
/// use schema_lineage::traits::migration::Inherit;
/// use serde_json::{json, Value};
///
/// // Version 2 made "origin" required on every checkout
/// fn add_origin(mut data: Value) -> Value {
///     if let Some(checkouts) = data.get_mut("checkouts").and_then(Value::as_array_mut) {
///         for checkout in checkouts {
///             checkout["origin"] = json!("unknown");
///         }
///     }
///     data["version"] = json!({"major": 2, "minor": 0});
///     data
/// }
///
/// let v1 = json!({"version": {"major": 1, "minor": 0}, "checkouts": [{"id": "c1"}]});
/// let v2 = add_origin.inherit(v1);
/// assert_eq!(v2["checkouts"][0]["origin"], "unknown");
/// assert_eq!(v2["version"]["major"], 2);
/// ```
pub trait Inherit: Send + Sync {
    /// Convert predecessor-valid data to this version. Takes ownership and
    /// may modify the data in place.
    fn inherit(&self, data: Value) -> Value;
}

impl<F> Inherit for F
where
    F: Fn(Value) -> Value + Send + Sync,
{
    fn inherit(&self, data: Value) -> Value {
        self(data)
    }
}
