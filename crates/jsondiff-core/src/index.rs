//! Canonical-path lookup table over a change list.
//!
//! The renderer never sees the diff engine's output directly. It asks this
//! index "what happened at this path?" and gets `Unchanged` for anything the
//! diff did not mention. Keys are canonical path strings, so an array index
//! and an object key with the same digits share an entry, as do a key
//! containing `.` (`"a.b"`) and the nested path `a` → `b`.

use std::collections::HashMap;

use crate::diff::{Change, ChangeKind};
use crate::path::Path;

/// Read-only map from canonical path to change kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeIndex {
    kinds: HashMap<String, ChangeKind>,
}

impl ChangeIndex {
    /// Index every change by its canonical path.
    ///
    /// If two changes flatten to the same string the later one wins. The diff
    /// engine emits one record per structured path, so this only happens with
    /// hand-built lists or the two canonical collisions: an array index next to
    /// a digit key, and a key containing `.` next to the nested path it spells.
    pub fn build(changes: &[Change]) -> Self {
        let kinds = changes
            .iter()
            .map(|change| (change.path.canonical(), change.kind))
            .collect();
        Self { kinds }
    }

    /// Status of the node at `path`; `Unchanged` when absent.
    pub fn lookup(&self, path: &Path) -> ChangeKind {
        self.lookup_str(&path.canonical())
    }

    /// Same as [`ChangeIndex::lookup`], keyed by an already-canonical string.
    pub fn lookup_str(&self, canonical: &str) -> ChangeKind {
        self.kinds
            .get(canonical)
            .copied()
            .unwrap_or(ChangeKind::Unchanged)
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, ChangeKind)> {
        self.kinds.iter().map(|(path, kind)| (path.as_str(), *kind))
    }
}

/// Free-function form of [`ChangeIndex::build`].
pub fn build_index(changes: &[Change]) -> ChangeIndex {
    ChangeIndex::build(changes)
}

/// Free-function form of [`ChangeIndex::lookup`].
///
/// ```
/// use jsondiff_core::{build_index, diff, lookup, ChangeKind, Path};
/// use serde_json::json;
///
/// let index = build_index(&diff(&json!({"x": 1}), &json!({"x": 2})));
/// assert_eq!(lookup(&index, &Path::root().child_key("x")), ChangeKind::Changed);
/// assert_eq!(lookup(&index, &Path::root().child_key("y")), ChangeKind::Unchanged);
/// ```
pub fn lookup(index: &ChangeIndex, path: &Path) -> ChangeKind {
    index.lookup(path)
}
