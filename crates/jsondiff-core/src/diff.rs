//! The diff engine: walk two JSON trees in lockstep and record every difference.
//!
//! Rules, applied at every path starting from the root:
//!
//! - **Object vs object**: visit the sorted union of both key sets. A key only
//!   in the new object is `Added`, a key only in the old one is `Removed`, a
//!   shared key recurses.
//! - **Array vs array**: compare by position. Shared indices recurse; surplus
//!   indices on the longer side are `Added` or `Removed`. No move detection.
//! - **Scalar vs scalar**: equal values produce nothing.
//! - **Anything else** (shape mismatch, or scalars that differ): one `Changed`
//!   record carrying both whole values. The engine does not descend further.
//!
//! The output is depth-first and key-sorted, and contains at most one record
//! per structured [`Path`]. Canonical strings can still repeat: an index and a
//! digit key (`Index(2)` / `Key("2")`) flatten alike, and so do a dotted key
//! and the nested path it spells (`Key("a.b")` / `a` then `b`).

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;
use serde_json::{Map, Number, Value};
use tracing::debug;

use crate::path::Path;

/// Classification of a node relative to the other document.
///
/// The engine only ever emits `Added`, `Removed` and `Changed`. `Unchanged`
/// is what an index lookup answers for a path with no record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Added,
    Removed,
    Changed,
    Unchanged,
}

impl ChangeKind {
    /// Lowercase name, used as the CSS class / marker by every serializer.
    pub fn as_str(self) -> &'static str {
        match self {
            ChangeKind::Added => "added",
            ChangeKind::Removed => "removed",
            ChangeKind::Changed => "changed",
            ChangeKind::Unchanged => "unchanged",
        }
    }

    /// The kind seen from the other side: added and removed swap.
    pub fn inverse(self) -> Self {
        match self {
            ChangeKind::Added => ChangeKind::Removed,
            ChangeKind::Removed => ChangeKind::Added,
            other => other,
        }
    }
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single difference between the two documents.
///
/// `from` is `None` for `Added`, `to` is `None` for `Removed`; both are set
/// for `Changed`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Change {
    pub path: Path,
    pub kind: ChangeKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<Value>,
}

impl Change {
    pub fn added(path: Path, to: Value) -> Self {
        Self {
            path,
            kind: ChangeKind::Added,
            from: None,
            to: Some(to),
        }
    }

    pub fn removed(path: Path, from: Value) -> Self {
        Self {
            path,
            kind: ChangeKind::Removed,
            from: Some(from),
            to: None,
        }
    }

    pub fn changed(path: Path, from: Value, to: Value) -> Self {
        Self {
            path,
            kind: ChangeKind::Changed,
            from: Some(from),
            to: Some(to),
        }
    }
}

/// Per-kind totals for a change list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DiffSummary {
    pub added: usize,
    pub removed: usize,
    pub changed: usize,
}

impl DiffSummary {
    pub fn from_changes(changes: &[Change]) -> Self {
        changes.iter().fold(Self::default(), |mut acc, change| {
            match change.kind {
                ChangeKind::Added => acc.added += 1,
                ChangeKind::Removed => acc.removed += 1,
                ChangeKind::Changed => acc.changed += 1,
                ChangeKind::Unchanged => {}
            }
            acc
        })
    }

    pub fn total(&self) -> usize {
        self.added + self.removed + self.changed
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

impl fmt::Display for DiffSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} added, {} removed, {} changed",
            self.added, self.removed, self.changed
        )
    }
}

/// Compare `a` (original) against `b` (modified).
///
/// Total over any pair of values; an identical pair yields an empty list.
///
/// # Examples
///
/// ```
/// use jsondiff_core::{diff, ChangeKind};
/// use serde_json::json;
///
/// let changes = diff(&json!([1, 2, 3]), &json!([1, 2]));
/// assert_eq!(changes.len(), 1);
/// assert_eq!(changes[0].kind, ChangeKind::Removed);
/// assert_eq!(changes[0].path.to_string(), "2");
/// assert_eq!(changes[0].from, Some(json!(3)));
/// ```
pub fn diff(a: &Value, b: &Value) -> Vec<Change> {
    let mut changes = Vec::new();
    diff_at(a, b, &Path::root(), &mut changes);
    debug!(changes = changes.len(), "diff complete");
    changes
}

fn diff_at(a: &Value, b: &Value, path: &Path, out: &mut Vec<Change>) {
    match (a, b) {
        (Value::Object(left), Value::Object(right)) => diff_objects(left, right, path, out),
        (Value::Array(left), Value::Array(right)) => diff_arrays(left, right, path, out),
        (Value::Null, Value::Null) => {}
        (Value::Bool(x), Value::Bool(y)) if x == y => {}
        (Value::String(x), Value::String(y)) if x == y => {}
        (Value::Number(x), Value::Number(y)) if numbers_equal(x, y) => {}
        _ => out.push(Change::changed(path.clone(), a.clone(), b.clone())),
    }
}

fn diff_objects(
    left: &Map<String, Value>,
    right: &Map<String, Value>,
    path: &Path,
    out: &mut Vec<Change>,
) {
    let keys: BTreeSet<&String> = left.keys().chain(right.keys()).collect();
    for key in keys {
        let child = path.child_key(key);
        match (left.get(key.as_str()), right.get(key.as_str())) {
            (Some(old), Some(new)) => diff_at(old, new, &child, out),
            (None, Some(new)) => out.push(Change::added(child, new.clone())),
            (Some(old), None) => out.push(Change::removed(child, old.clone())),
            (None, None) => {}
        }
    }
}

fn diff_arrays(left: &[Value], right: &[Value], path: &Path, out: &mut Vec<Change>) {
    let shared = left.len().min(right.len());
    for i in 0..shared {
        diff_at(&left[i], &right[i], &path.child_index(i), out);
    }
    for (i, new) in right.iter().enumerate().skip(shared) {
        out.push(Change::added(path.child_index(i), new.clone()));
    }
    for (i, old) in left.iter().enumerate().skip(shared) {
        out.push(Change::removed(path.child_index(i), old.clone()));
    }
}

/// Value equality across integer and float encodings: `1` equals `1.0`.
fn numbers_equal(x: &Number, y: &Number) -> bool {
    if let (Some(a), Some(b)) = (x.as_i64(), y.as_i64()) {
        return a == b;
    }
    if let (Some(a), Some(b)) = (x.as_u64(), y.as_u64()) {
        return a == b;
    }
    if x.is_f64() || y.is_f64() {
        return x.as_f64() == y.as_f64();
    }
    // One negative i64 and one u64 above i64::MAX.
    false
}
