//! HTML page assembly around the rendered fragments.
//!
//! Templates are plain HTML with `{{name}}` placeholders. Recognised names are
//! `title`, `summary`, `original`, `modified` and `diffs`; anything else is
//! left in the output untouched. Substitution is a single left-to-right pass,
//! so placeholder-like text inside the documents is never expanded.

use jsondiff_core::{escape_html, Comparison, HtmlMarkup, Markup, ReportRow};

/// Template used when `--template` is not given.
pub const DEFAULT_TEMPLATE: &str = include_str!("template.html");

/// Fill `template` with the report for `cmp`.
pub fn render_page(template: &str, title: &str, cmp: &Comparison) -> String {
    let original = HtmlMarkup.to_markup(&cmp.original);
    let modified = HtmlMarkup.to_markup(&cmp.modified);
    let diffs = diff_table_rows(&cmp.rows());
    let summary = cmp.summary().to_string();

    fill(template, |name| match name {
        "title" => Some(escape_html(title)),
        "summary" => Some(summary.clone()),
        "original" => Some(original.clone()),
        "modified" => Some(modified.clone()),
        "diffs" => Some(diffs.clone()),
        _ => None,
    })
}

/// `<tr>` lines for the diff table body.
pub fn diff_table_rows(rows: &[ReportRow]) -> String {
    if rows.is_empty() {
        return r#"<tr><td colspan="4">No differences</td></tr>"#.to_string();
    }
    rows.iter()
        .map(|row| {
            format!(
                r#"<tr class="{kind}"><td><code>{path}</code></td><td>{kind}</td><td><code>{from}</code></td><td><code>{to}</code></td></tr>"#,
                kind = row.kind,
                path = escape_html(&row.path),
                from = escape_html(&row.from),
                to = escape_html(&row.to),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn fill(template: &str, lookup: impl Fn(&str) -> Option<String>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find("}}") {
            Some(end) => {
                let name = after[..end].trim();
                match lookup(name) {
                    Some(value) => out.push_str(&value),
                    None => out.push_str(&rest[start..start + 2 + end + 2]),
                }
                rest = &after[end + 2..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsondiff_core::compare;
    use serde_json::json;

    #[test]
    fn fill_replaces_known_names_once() {
        let out = fill("a {{x}} b {{ y }} {{unknown}} {{open", |name| match name {
            "x" => Some("{{y}}".to_string()),
            "y" => Some("Y".to_string()),
            _ => None,
        });
        assert_eq!(out, "a {{y}} b Y {{unknown}} {{open");
    }

    #[test]
    fn page_contains_both_panes_and_the_table() {
        let cmp = compare(&json!({"x": 1}), &json!({"x": 2}));
        let page = render_page(DEFAULT_TEMPLATE, "a.json vs <b>.json", &cmp);
        assert!(page.contains("<title>a.json vs &lt;b&gt;.json</title>"));
        assert!(page.contains("0 added, 0 removed, 1 changed"));
        assert!(page.contains(r#"<tr class="changed"><td><code>x</code></td><td>changed</td><td><code>1</code></td><td><code>2</code></td></tr>"#));
        assert_eq!(page.matches(r#"<li class="json-key changed">"#).count(), 2);
        assert!(!page.contains("{{"));
    }

    #[test]
    fn empty_diff_table_says_so() {
        assert!(diff_table_rows(&[]).contains("No differences"));
    }
}
