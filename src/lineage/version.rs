use std::cmp::Ordering;
use std::iter::FusedIterator;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::descriptor::VersionDescriptor;
use super::{LineageInner, Tree};
use crate::errors::{LineageError, LineageResult};

/// A `{major, minor}` pair, as declared by data or carried by a version.
///
/// ```
/// use schema_lineage::lineage::VersionNumber;
///
/// let number = VersionNumber::from((4, 2));
/// assert_eq!(number, VersionNumber::new(4, 2));
/// assert_eq!(number.to_string(), "v4.2");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::From,
)]
pub struct VersionNumber {
    pub major: u32,
    pub minor: u32,
}

impl VersionNumber {
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }
}

impl std::fmt::Display for VersionNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "v{}.{}", self.major, self.minor)
    }
}

/// Handle to one version of a lineage.
///
/// Cheap to clone, and shareable across threads. Versions are ordered by
/// their position in the lineage: `a <= b` holds when `a` is `b` or one of
/// its ancestors. Versions of different lineages are not comparable:
/// `partial_cmp` returns `None` and [`Version::try_cmp`] returns
/// [`LineageError::Incomparable`].
#[derive(Clone)]
pub struct Version {
    pub(crate) lineage: Arc<LineageInner>,
    pub(crate) index: usize,
}

impl Version {
    pub(crate) fn descriptor(&self) -> &VersionDescriptor {
        &self.lineage.versions[self.index]
    }

    pub fn number(&self) -> VersionNumber {
        self.descriptor().number
    }

    pub fn major(&self) -> u32 {
        self.number().major
    }

    pub fn minor(&self) -> u32 {
        self.number().minor
    }

    /// The schema document this version validates against.
    pub fn schema(&self) -> &Value {
        &self.descriptor().schema
    }

    pub fn tree(&self) -> &Tree {
        &self.descriptor().tree
    }

    pub fn lineage_name(&self) -> &str {
        &self.lineage.name
    }

    /// Whether this is the oldest version of its lineage.
    pub fn is_root(&self) -> bool {
        self.index == 0
    }

    /// Whether this is the newest version of its lineage.
    pub fn is_latest(&self) -> bool {
        self.index + 1 == self.lineage.versions.len()
    }

    /// The immediately older version, `None` for the root.
    pub fn previous(&self) -> Option<Version> {
        self.index.checked_sub(1).map(|index| Version {
            lineage: Arc::clone(&self.lineage),
            index,
        })
    }

    /// This version followed by each of its ancestors, newest first.
    pub fn lineage(&self) -> Ancestors {
        Ancestors {
            lineage: Arc::clone(&self.lineage),
            next: Some(self.index),
        }
    }

    pub fn same_lineage(&self, other: &Version) -> bool {
        Arc::ptr_eq(&self.lineage, &other.lineage)
    }

    /// Compare lineage positions, failing for versions of different lineages.
    pub fn try_cmp(&self, other: &Version) -> LineageResult<Ordering> {
        self.partial_cmp(other)
            .ok_or_else(|| LineageError::Incomparable {
                left: format!("{self:?}"),
                right: format!("{other:?}"),
            })
    }

    /// Whether this version is `other` or one of its ancestors.
    pub fn is_ancestor_of(&self, other: &Version) -> LineageResult<bool> {
        Ok(self.try_cmp(other)? != Ordering::Greater)
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.same_lineage(other) && self.index == other.index
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.same_lineage(other)
            .then(|| self.index.cmp(&other.index))
    }
}

impl std::fmt::Debug for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.lineage.name, self.number())
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.number(), f)
    }
}

/// Iterator over a version and its ancestors, newest first.
///
/// Finite, and restartable by cloning.
#[derive(Clone)]
pub struct Ancestors {
    lineage: Arc<LineageInner>,
    next: Option<usize>,
}

impl Iterator for Ancestors {
    type Item = Version;

    fn next(&mut self) -> Option<Version> {
        let index = self.next?;
        self.next = index.checked_sub(1);
        Some(Version {
            lineage: Arc::clone(&self.lineage),
            index,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.next.map_or(0, |index| index + 1);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Ancestors {}

impl FusedIterator for Ancestors {}
