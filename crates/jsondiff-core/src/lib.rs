//! # jsondiff-core
//!
//! Structural comparison of two JSON documents, plus the machinery to paint the
//! result onto a rendering of either document.
//!
//! The crate is split so the two halves never talk to each other directly:
//! the diff engine produces a path-addressed list of [`Change`] records, the
//! [`ChangeIndex`] flattens those into a canonical-path lookup table, and the
//! renderer walks a (key-sorted) document asking the index for the status of
//! every node it visits.
//!
//! ## Quick start
//!
//! ```rust
//! use jsondiff_core::{diff, render, ChangeIndex, ChangeKind, HtmlMarkup, Markup};
//! use serde_json::json;
//!
//! let a = json!({"x": 1, "y": [1, 2]});
//! let b = json!({"x": 2, "y": [1, 2]});
//!
//! let changes = diff(&a, &b);
//! assert_eq!(changes.len(), 1);
//! assert_eq!(changes[0].path.to_string(), "x");
//! assert_eq!(changes[0].kind, ChangeKind::Changed);
//!
//! let index = ChangeIndex::build(&changes);
//! let tree = render(&b, &index);
//! let html = HtmlMarkup.to_markup(&tree);
//! assert!(html.contains(r#"<li class="json-key changed">"#));
//! ```
//!
//! ## Modules
//!
//! - [`path`] — `Path` / `Segment` and the canonical dotted string form
//! - [`diff`] — the diff engine (`diff`, `Change`, `ChangeKind`)
//! - [`index`] — `ChangeIndex`, canonical path → change kind
//! - [`sort`] — pure key-sorting transform for display
//! - [`render`] — annotated node tree built from a document and an index
//! - [`markup`] — swappable serializers for the node tree (HTML, plain text)
//! - [`report`] — diff table rows and the all-in-one [`compare`]
//! - [`error`] — boundary errors (malformed input, output write failure)

pub mod diff;
pub mod error;
pub mod index;
pub mod markup;
pub mod path;
pub mod render;
pub mod report;
pub mod sort;

pub use diff::{diff, Change, ChangeKind, DiffSummary};
pub use error::{parse_document, JsonDiffError};
pub use index::{build_index, lookup, ChangeIndex};
pub use markup::{escape_html, HtmlMarkup, Markup, TextMarkup};
pub use path::{Path, Segment};
pub use render::{render, Annotated, Node};
pub use report::{compare, report_rows, Comparison, ReportRow};
pub use sort::sort_value;
