//! Annotated renderer: turn a document plus a [`ChangeIndex`] into a node tree
//! where every node carries its change status.
//!
//! The walk builds paths exactly as the diff engine does (`child_key` for
//! object members, `child_index` for array elements), so the index lookups
//! line up with the records the engine produced. Object members are emitted
//! in sorted key order; array elements keep their positions.
//!
//! The tree is format-neutral. Turning it into HTML or text is the job of a
//! [`crate::markup::Markup`] implementation.

use serde_json::Value;

use crate::diff::ChangeKind;
use crate::index::ChangeIndex;
use crate::path::{Path, Segment};

/// A rendered node and the status of the path it sits at.
#[derive(Debug, Clone, PartialEq)]
pub struct Annotated {
    pub status: ChangeKind,
    pub node: Node,
}

/// Shape of a rendered node. Numbers are kept as their JSON text.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Members in sorted key order.
    Object(Vec<(String, Annotated)>),
    Array(Vec<Annotated>),
    Null,
    Bool(bool),
    Number(String),
    String(String),
}

impl Annotated {
    /// Status of the descendant at `path`, or `None` if the tree has no node
    /// there.
    pub fn status_at(&self, path: &Path) -> Option<ChangeKind> {
        self.node_at(path).map(|node| node.status)
    }

    /// The descendant at `path`, if any.
    pub fn node_at(&self, path: &Path) -> Option<&Annotated> {
        let mut current = self;
        for segment in path.segments() {
            current = match (&current.node, segment) {
                (Node::Object(members), Segment::Key(key)) => members
                    .iter()
                    .find(|(name, _)| name == key)
                    .map(|(_, child)| child)?,
                (Node::Array(items), Segment::Index(i)) => items.get(*i)?,
                _ => return None,
            };
        }
        Some(current)
    }

    /// True when this node or anything beneath it is not `Unchanged`.
    pub fn has_changes(&self) -> bool {
        if self.status != ChangeKind::Unchanged {
            return true;
        }
        match &self.node {
            Node::Object(members) => members.iter().any(|(_, child)| child.has_changes()),
            Node::Array(items) => items.iter().any(Annotated::has_changes),
            _ => false,
        }
    }
}

/// Build the annotated tree for `value`.
///
/// The root is looked up at the root path, so a whole-document replacement
/// shows up on the root node itself.
///
/// # Examples
///
/// ```
/// use jsondiff_core::{diff, render, ChangeIndex, ChangeKind, Path};
/// use serde_json::json;
///
/// let a = json!({"items": [1, 2]});
/// let b = json!({"items": [1, 2, 3]});
/// let tree = render(&b, &ChangeIndex::build(&diff(&a, &b)));
///
/// let third = Path::root().child_key("items").child_index(2);
/// assert_eq!(tree.status_at(&third), Some(ChangeKind::Added));
/// assert_eq!(tree.status_at(&Path::root().child_key("items")), Some(ChangeKind::Unchanged));
/// ```
pub fn render(value: &Value, index: &ChangeIndex) -> Annotated {
    render_at(value, &Path::root(), index)
}

fn render_at(value: &Value, path: &Path, index: &ChangeIndex) -> Annotated {
    let node = match value {
        Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();
            Node::Object(
                keys.into_iter()
                    .map(|key| {
                        let child = render_at(&map[key.as_str()], &path.child_key(key), index);
                        (key.clone(), child)
                    })
                    .collect(),
            )
        }
        Value::Array(items) => Node::Array(
            items
                .iter()
                .enumerate()
                .map(|(i, item)| render_at(item, &path.child_index(i), index))
                .collect(),
        ),
        Value::Null => Node::Null,
        Value::Bool(b) => Node::Bool(*b),
        Value::Number(n) => Node::Number(n.to_string()),
        Value::String(s) => Node::String(s.clone()),
    };
    Annotated {
        status: index.lookup(path),
        node,
    }
}
