//! Report assembly: the flat diff table and the one-call [`compare`].

use serde::Serialize;
use serde_json::Value;

use crate::diff::{diff, Change, ChangeKind, DiffSummary};
use crate::index::ChangeIndex;
use crate::render::{render, Annotated};
use crate::sort::sort_value;

/// One line of the diff table. Values are compact JSON text, empty when the
/// side does not exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    pub path: String,
    pub kind: ChangeKind,
    pub from: String,
    pub to: String,
}

/// Flatten a change list into table rows, preserving order.
pub fn report_rows(changes: &[Change]) -> Vec<ReportRow> {
    changes
        .iter()
        .map(|change| ReportRow {
            path: change.path.canonical(),
            kind: change.kind,
            from: change.from.as_ref().map(Value::to_string).unwrap_or_default(),
            to: change.to.as_ref().map(Value::to_string).unwrap_or_default(),
        })
        .collect()
}

/// Everything a report needs from one comparison.
#[derive(Debug, Clone)]
pub struct Comparison {
    pub changes: Vec<Change>,
    pub index: ChangeIndex,
    /// Key-sorted rendering of the original document.
    pub original: Annotated,
    /// Key-sorted rendering of the modified document.
    pub modified: Annotated,
}

impl Comparison {
    pub fn summary(&self) -> DiffSummary {
        DiffSummary::from_changes(&self.changes)
    }

    pub fn rows(&self) -> Vec<ReportRow> {
        report_rows(&self.changes)
    }
}

/// Diff `a` against `b`, index the result and render both sides.
///
/// Both renderings consult the same index, so an `Added` path is marked on
/// whichever side actually has the node (the modified one) and likewise for
/// `Removed`.
///
/// ```
/// use jsondiff_core::{compare, ChangeKind, Path};
/// use serde_json::json;
///
/// let cmp = compare(&json!({"gone": 1}), &json!({"new": 2}));
/// assert_eq!(cmp.summary().total(), 2);
/// assert_eq!(cmp.original.status_at(&Path::root().child_key("gone")), Some(ChangeKind::Removed));
/// assert_eq!(cmp.modified.status_at(&Path::root().child_key("new")), Some(ChangeKind::Added));
/// ```
pub fn compare(a: &Value, b: &Value) -> Comparison {
    let changes = diff(a, b);
    let index = ChangeIndex::build(&changes);
    let original = render(&sort_value(a), &index);
    let modified = render(&sort_value(b), &index);
    Comparison {
        changes,
        index,
        original,
        modified,
    }
}
