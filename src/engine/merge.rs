//! Combining datasets by per-collection concatenation.

use std::borrow::Cow;

use log::{debug, trace};
use serde_json::{Map, Value};

use crate::errors::{LineageError, LineageResult};
use crate::lineage::Version;

impl Version {
    /// Merge copies of the sources into a copy of the target.
    ///
    /// See [`merge_with`](Self::merge_with).
    pub fn merge<'a, I>(&self, target: &'a Value, sources: I) -> LineageResult<Value>
    where
        I: IntoIterator<Item = &'a Value>,
    {
        self.merge_with(
            Cow::Borrowed(target),
            sources.into_iter().map(Cow::Borrowed),
        )
    }

    /// Merge the sources into the target, consuming both.
    pub fn merge_owned<I>(&self, target: Value, sources: I) -> LineageResult<Value>
    where
        I: IntoIterator<Item = Value>,
    {
        self.merge_with(
            Cow::Owned(target),
            sources.into_iter().map(Cow::<'static, Value>::Owned),
        )
    }

    /// Merge multiple datasets into a target dataset.
    ///
    /// Borrowed inputs are copied before being upgraded, owned ones are
    /// upgraded in place. Before each source is merged, whichever of target
    /// and source is older is upgraded to the other's version, so the result
    /// adheres to the newest version among all inputs. Records of each
    /// collection are appended after the target's, in source order.
    pub fn merge_with<'a, I>(&self, target: Cow<'a, Value>, sources: I) -> LineageResult<Value>
    where
        I: IntoIterator<Item = Cow<'a, Value>>,
    {
        if self.strict() {
            self.validate(&target)?;
        }
        let mut target_version = self.resolve(&target)?;
        let mut target = target.into_owned();

        for source in sources {
            if self.strict() {
                self.validate(&source)?;
            }
            let source_version = self.resolve(&source)?;

            let source = if source_version >= target_version {
                if source_version != target_version {
                    debug!("{self:?}: raising merge target from {target_version} to {source_version}");
                    target = source_version.upgrade_owned(target)?;
                    target_version = source_version;
                }
                source.into_owned()
            } else {
                target_version.upgrade_with(source)?
            };

            target_version.absorb(&mut target, source)?;
        }

        if self.strict() {
            target_version.validate_exactly(&target)?;
        }
        Ok(target)
    }

    /// Append every collection of `source` declared in this version's tree
    /// to `target`.
    fn absorb(&self, target: &mut Value, mut source: Value) -> LineageResult<()> {
        let target = self.object_mut(target)?;
        for name in self.tree().collections() {
            let records = match source.get_mut(name).map(Value::take) {
                None => continue,
                Some(Value::Array(records)) => records,
                Some(_) => return Err(self.not_a_collection(name)),
            };
            trace!("{self:?}: appending {} record(s) to '{name}'", records.len());
            match target
                .entry(name)
                .or_insert_with(|| Value::Array(Vec::new()))
            {
                Value::Array(existing) => existing.extend(records),
                _ => return Err(self.not_a_collection(name)),
            }
        }
        Ok(())
    }

    fn object_mut<'d>(&self, data: &'d mut Value) -> LineageResult<&'d mut Map<String, Value>> {
        data.as_object_mut().ok_or_else(|| {
            LineageError::MalformedVersion(format!("{self:?}: dataset is not an object"))
        })
    }

    fn not_a_collection(&self, name: &str) -> LineageError {
        LineageError::NotACollection {
            version: self.number(),
            collection: name.to_string(),
        }
    }
}
