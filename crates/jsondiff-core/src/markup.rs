//! Serializers for the annotated node tree.
//!
//! The renderer decides *which* class every node gets; a [`Markup`] decides
//! what that looks like on the page. Two are provided:
//!
//! - [`HtmlMarkup`] — nested `div`/`ul`/`li` fragment with one CSS class per
//!   node (`added`, `removed`, `changed`, `unchanged`), meant to be dropped
//!   into a page template
//! - [`TextMarkup`] — pretty-printed JSON with a one-character change marker
//!   in front of every line, for terminals

use std::fmt::Write as _;

use serde_json::Value;

use crate::diff::ChangeKind;
use crate::render::{Annotated, Node};

/// Turns an annotated tree into a concrete output format.
pub trait Markup {
    /// Append the rendering of `tree` to `out`.
    fn write(&self, tree: &Annotated, out: &mut String);

    /// Render `tree` into a fresh string.
    fn to_markup(&self, tree: &Annotated) -> String {
        let mut out = String::new();
        self.write(tree, &mut out);
        out
    }
}

/// Escape text for inclusion in HTML element content or attribute values.
///
/// ```
/// use jsondiff_core::escape_html;
///
/// assert_eq!(escape_html(r#"<a href="x">&'"#), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
/// ```
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// HTML fragment serializer.
///
/// Containers become `div.json-object` / `div.json-array` wrapping a
/// `ul.json-list`; each member or element is an `li.json-key` carrying the
/// child's status class. Leaves are `span.json-string`, `span.json-number`,
/// `span.json-bool` or `span.json-null`, also carrying their status.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlMarkup;

impl Markup for HtmlMarkup {
    fn write(&self, tree: &Annotated, out: &mut String) {
        write_html(tree, out);
    }
}

fn write_html(tree: &Annotated, out: &mut String) {
    let class = tree.status.as_str();
    match &tree.node {
        Node::Object(members) => {
            let _ = write!(out, r#"<div class="json-object {}">{{"#, class);
            out.push_str(r#"<ul class="json-list">"#);
            for (i, (key, child)) in members.iter().enumerate() {
                let _ = write!(out, r#"<li class="json-key {}">"#, child.status.as_str());
                let _ = write!(out, r#"<span class="key">"{}"</span>: "#, escape_html(key));
                write_html(child, out);
                if i + 1 < members.len() {
                    out.push(',');
                }
                out.push_str("</li>");
            }
            out.push_str("</ul>}</div>");
        }
        Node::Array(items) => {
            let _ = write!(out, r#"<div class="json-array {}">["#, class);
            out.push_str(r#"<ul class="json-list">"#);
            for (i, child) in items.iter().enumerate() {
                let _ = write!(out, r#"<li class="json-key {}">"#, child.status.as_str());
                write_html(child, out);
                if i + 1 < items.len() {
                    out.push(',');
                }
                out.push_str("</li>");
            }
            out.push_str("</ul>]</div>");
        }
        Node::String(s) => {
            let _ = write!(
                out,
                r#"<span class="json-string {}">"{}"</span>"#,
                class,
                escape_html(s)
            );
        }
        Node::Number(n) => {
            let _ = write!(out, r#"<span class="json-number {}">{}</span>"#, class, n);
        }
        Node::Bool(b) => {
            let _ = write!(out, r#"<span class="json-bool {}">{}</span>"#, class, b);
        }
        Node::Null => {
            let _ = write!(out, r#"<span class="json-null {}">null</span>"#, class);
        }
    }
}

/// Plain-text serializer.
///
/// Output is indented JSON; every line starts with the status marker of the
/// node it belongs to (`+` added, `-` removed, `~` changed, space otherwise)
/// followed by a space.
#[derive(Debug, Clone, Copy)]
pub struct TextMarkup {
    /// Spaces per nesting level.
    pub indent: usize,
}

impl Default for TextMarkup {
    fn default() -> Self {
        Self { indent: 2 }
    }
}

impl TextMarkup {
    /// Line prefix for a status.
    pub fn marker(status: ChangeKind) -> char {
        match status {
            ChangeKind::Added => '+',
            ChangeKind::Removed => '-',
            ChangeKind::Changed => '~',
            ChangeKind::Unchanged => ' ',
        }
    }

    fn write_node(
        &self,
        tree: &Annotated,
        key: Option<&str>,
        depth: usize,
        comma: bool,
        out: &mut String,
    ) {
        let marker = Self::marker(tree.status);
        let pad = " ".repeat(depth * self.indent);
        let label = key.map(|k| format!("{}: ", quote(k))).unwrap_or_default();
        let tail = if comma { "," } else { "" };

        let (open, close, children): (char, char, Vec<(Option<&str>, &Annotated)>) =
            match &tree.node {
                Node::Object(members) => (
                    '{',
                    '}',
                    members.iter().map(|(k, c)| (Some(k.as_str()), c)).collect(),
                ),
                Node::Array(items) => ('[', ']', items.iter().map(|c| (None, c)).collect()),
                leaf => {
                    let _ = writeln!(out, "{} {}{}{}{}", marker, pad, label, leaf_text(leaf), tail);
                    return;
                }
            };

        if children.is_empty() {
            let _ = writeln!(out, "{} {}{}{}{}{}", marker, pad, label, open, close, tail);
            return;
        }
        let _ = writeln!(out, "{} {}{}{}", marker, pad, label, open);
        let last = children.len() - 1;
        for (i, (child_key, child)) in children.into_iter().enumerate() {
            self.write_node(child, child_key, depth + 1, i < last, out);
        }
        let _ = writeln!(out, "{} {}{}{}", marker, pad, close, tail);
    }
}

impl Markup for TextMarkup {
    fn write(&self, tree: &Annotated, out: &mut String) {
        self.write_node(tree, None, 0, false, out);
    }
}

fn quote(s: &str) -> String {
    Value::String(s.to_string()).to_string()
}

fn leaf_text(node: &Node) -> String {
    match node {
        Node::Null => "null".to_string(),
        Node::Bool(b) => b.to_string(),
        Node::Number(n) => n.clone(),
        Node::String(s) => quote(s),
        Node::Object(_) | Node::Array(_) => String::new(),
    }
}
