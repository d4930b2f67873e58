use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Parent/child nesting of the object collections in a dataset.
///
/// Maps a collection name to its child collection names; the empty string
/// maps to the topmost collections.
///
/// ```
/// use schema_lineage::lineage::Tree;
///
/// let tree = Tree::new([
///     ("", vec!["checkouts"]),
///     ("checkouts", vec!["builds"]),
///     ("builds", vec![]),
/// ]);
/// assert_eq!(tree.roots(), ["checkouts".to_string()]);
/// assert_eq!(tree.collections().collect::<Vec<_>>(), ["builds", "checkouts"]);
/// assert!(tree.check().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tree(BTreeMap<String, Vec<String>>);

impl Tree {
    /// The key holding the topmost collections.
    pub const ROOT: &'static str = "";

    pub fn new<K, V, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, Vec<V>)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into_iter().map(Into::into).collect()))
                .collect(),
        )
    }

    /// Topmost collection names, empty if the root key is missing.
    pub fn roots(&self) -> &[String] {
        self.children(Self::ROOT).unwrap_or_default()
    }

    pub fn children(&self, name: &str) -> Option<&[String]> {
        self.0.get(name).map(Vec::as_slice)
    }

    /// Every declared collection name, excluding the root key.
    pub fn collections(&self) -> impl Iterator<Item = &str> + '_ {
        self.0
            .keys()
            .map(String::as_str)
            .filter(|name| *name != Self::ROOT)
    }

    pub fn contains(&self, name: &str) -> bool {
        name != Self::ROOT && self.0.contains_key(name)
    }

    /// Check the tree is well formed.
    ///
    /// The root key must exist, child names must be non-empty declared
    /// collections with a single parent, and every collection must be
    /// reachable from the root.
    pub fn check(&self) -> Result<(), String> {
        if !self.0.contains_key(Self::ROOT) {
            return Err("tree has no root (\"\") key".to_string());
        }

        let mut parents: BTreeMap<&str, &str> = BTreeMap::new();
        for (parent, children) in &self.0 {
            for child in children {
                if child.is_empty() {
                    return Err(format!("collection '{parent}' lists an empty child name"));
                }
                if !self.0.contains_key(child) {
                    return Err(format!(
                        "collection '{child}' (child of '{parent}') is not declared"
                    ));
                }
                if let Some(previous) = parents.insert(child.as_str(), parent.as_str()) {
                    return Err(format!(
                        "collection '{child}' has two parents: '{previous}' and '{parent}'"
                    ));
                }
            }
        }

        let mut reached = BTreeSet::new();
        let mut pending = vec![Self::ROOT];
        while let Some(name) = pending.pop() {
            for child in self.children(name).unwrap_or_default() {
                if reached.insert(child.as_str()) {
                    pending.push(child);
                }
            }
        }
        if let Some(orphan) = self.collections().find(|name| !reached.contains(name)) {
            return Err(format!("collection '{orphan}' is not reachable from the root"));
        }

        Ok(())
    }
}
