//! Locations inside a JSON document.
//!
//! A [`Path`] is a list of [`Segment`]s from the root. Its canonical string
//! form joins the segments with `.` and renders an array index as its decimal
//! digits, so `Index(2)` and `Key("2")` produce the same string. Keys are not
//! escaped either: `Key("a.b")` reads the same as `Key("a")` then `Key("b")`.
//! The diff engine and the renderer both key the change index on that string;
//! they must build paths the same way or annotations silently miss.

use std::fmt;

use serde::{Serialize, Serializer};

/// One step into a container.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Object member name.
    Key(String),
    /// Array position.
    Index(usize),
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Key(key) => f.write_str(key),
            Segment::Index(i) => write!(f, "{}", i),
        }
    }
}

/// An ordered sequence of segments identifying a node, starting at the root.
///
/// Equality is structural (`Key("2") != Index(2)`); use [`Path::canonical`]
/// when the flattened form is what matters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path {
    segments: Vec<Segment>,
}

impl Path {
    /// The empty path, addressing the document root.
    pub fn root() -> Self {
        Self::default()
    }

    /// A new path one object member deeper.
    pub fn child_key(&self, key: &str) -> Self {
        self.child(Segment::Key(key.to_string()))
    }

    /// A new path one array element deeper.
    pub fn child_index(&self, index: usize) -> Self {
        self.child(Segment::Index(index))
    }

    fn child(&self, segment: Segment) -> Self {
        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.extend_from_slice(&self.segments);
        segments.push(segment);
        Self { segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Segments joined with `.`; the root is the empty string.
    ///
    /// ```
    /// use jsondiff_core::Path;
    ///
    /// let p = Path::root().child_key("items").child_index(3).child_key("id");
    /// assert_eq!(p.canonical(), "items.3.id");
    /// assert_eq!(Path::root().canonical(), "");
    /// ```
    pub fn canonical(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}

// Machine-readable reports carry the canonical string, the same key the
// change index uses.
impl Serialize for Path {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
