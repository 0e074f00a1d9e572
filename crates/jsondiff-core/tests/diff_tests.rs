//! Diff engine contract tests.
//!
//! Each test feeds two documents to `diff` and checks the exact change list:
//! paths, kinds, carried values and ordering.
use jsondiff_core::{diff, parse_document, Change, ChangeKind, DiffSummary, JsonDiffError, Path};
use serde_json::json;

fn key(k: &str) -> Path {
    Path::root().child_key(k)
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn identical_objects_produce_no_changes() {
    assert!(diff(&json!({"x": 1}), &json!({"x": 1})).is_empty());
}

#[test]
fn changed_scalar_member() {
    let changes = diff(&json!({"x": 1}), &json!({"x": 2}));
    assert_eq!(changes, vec![Change::changed(key("x"), json!(1), json!(2))]);
}

#[test]
fn added_array_is_one_record_not_per_index() {
    let changes = diff(&json!({}), &json!({"y": [1, 2]}));
    assert_eq!(changes, vec![Change::added(key("y"), json!([1, 2]))]);
    assert_eq!(changes[0].from, None);
}

#[test]
fn shorter_array_removes_trailing_index() {
    let changes = diff(&json!([1, 2, 3]), &json!([1, 2]));
    assert_eq!(
        changes,
        vec![Change::removed(Path::root().child_index(2), json!(3))]
    );
    assert_eq!(changes[0].to, None);
}

#[test]
fn object_replaced_by_scalar_is_one_changed_record() {
    let changes = diff(&json!({"n": {"a": 1}}), &json!({"n": 5}));
    assert_eq!(
        changes,
        vec![Change::changed(key("n"), json!({"a": 1}), json!(5))]
    );
}

// ============================================================================
// Objects
// ============================================================================

#[test]
fn scalar_replaced_by_object_does_not_descend() {
    let changes = diff(&json!({"x": 1}), &json!({"x": {"a": 1, "b": 2}}));
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].kind, ChangeKind::Changed);
    assert_eq!(changes[0].to, Some(json!({"a": 1, "b": 2})));
}

#[test]
fn object_keys_are_visited_in_sorted_order() {
    let a = json!({"d": 1, "b": 1, "c": 1});
    let b = json!({"a": 1, "c": 2, "b": 1});
    let paths: Vec<String> = diff(&a, &b).iter().map(|c| c.path.canonical()).collect();
    assert_eq!(paths, vec!["a", "c", "d"]);

    let kinds: Vec<ChangeKind> = diff(&a, &b).iter().map(|c| c.kind).collect();
    assert_eq!(
        kinds,
        vec![ChangeKind::Added, ChangeKind::Changed, ChangeKind::Removed]
    );
}

#[test]
fn key_order_in_input_does_not_matter() {
    let a: serde_json::Value = serde_json::from_str(r#"{"a":1,"b":{"y":1,"x":2}}"#).unwrap();
    let b: serde_json::Value = serde_json::from_str(r#"{"b":{"x":2,"y":1},"a":1}"#).unwrap();
    assert!(diff(&a, &b).is_empty());
}

#[test]
fn nested_paths_are_dotted() {
    let a = json!({"user": {"address": {"city": "Paris"}}});
    let b = json!({"user": {"address": {"city": "Lyon"}}});
    let changes = diff(&a, &b);
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].path.canonical(), "user.address.city");
}

#[test]
fn removed_member_carries_old_value() {
    let changes = diff(&json!({"keep": 1, "drop": {"deep": true}}), &json!({"keep": 1}));
    assert_eq!(
        changes,
        vec![Change::removed(key("drop"), json!({"deep": true}))]
    );
}

// ============================================================================
// Arrays
// ============================================================================

#[test]
fn arrays_compare_by_position_without_move_detection() {
    let changes = diff(&json!([1, 2, 3]), &json!([3, 1, 2]));
    let paths: Vec<String> = changes.iter().map(|c| c.path.canonical()).collect();
    assert_eq!(paths, vec!["0", "1", "2"]);
    assert!(changes.iter().all(|c| c.kind == ChangeKind::Changed));
}

#[test]
fn longer_array_adds_each_extra_index() {
    let changes = diff(&json!(["a"]), &json!(["a", "b", "c"]));
    assert_eq!(
        changes,
        vec![
            Change::added(Path::root().child_index(1), json!("b")),
            Change::added(Path::root().child_index(2), json!("c")),
        ]
    );
}

#[test]
fn objects_inside_arrays_are_diffed_by_key() {
    let a = json!({"items": [{"id": 1, "tag": "x"}, {"id": 2}]});
    let b = json!({"items": [{"id": 1, "tag": "y"}, {"id": 2, "new": null}]});
    let changes = diff(&a, &b);
    assert_eq!(
        changes,
        vec![
            Change::changed(
                Path::root().child_key("items").child_index(0).child_key("tag"),
                json!("x"),
                json!("y")
            ),
            Change::added(
                Path::root().child_key("items").child_index(1).child_key("new"),
                json!(null)
            ),
        ]
    );
}

#[test]
fn array_replaced_by_object_is_changed() {
    let changes = diff(&json!({"v": [1]}), &json!({"v": {"0": 1}}));
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].kind, ChangeKind::Changed);
}

// ============================================================================
// Scalars and roots
// ============================================================================

#[test]
fn root_scalar_change_sits_at_root_path() {
    let changes = diff(&json!("a"), &json!("b"));
    assert_eq!(changes.len(), 1);
    assert!(changes[0].path.is_root());
    assert_eq!(changes[0].path.canonical(), "");
}

#[test]
fn type_change_between_scalars_is_changed() {
    let changes = diff(&json!({"v": "1"}), &json!({"v": 1}));
    assert_eq!(changes, vec![Change::changed(key("v"), json!("1"), json!(1))]);

    let changes = diff(&json!({"v": null}), &json!({"v": false}));
    assert_eq!(changes.len(), 1);
}

#[test]
fn integer_and_float_with_same_value_are_equal() {
    assert!(diff(&json!({"n": 1}), &json!({"n": 1.0})).is_empty());
    assert_eq!(diff(&json!({"n": 1}), &json!({"n": 1.5})).len(), 1);
}

#[test]
fn numbers_compare_exactly() {
    assert_eq!(diff(&json!(0.1), &json!(0.10000001)).len(), 1);
}

#[test]
fn empty_containers_compare_equal() {
    assert!(diff(&json!({}), &json!({})).is_empty());
    assert!(diff(&json!([]), &json!([])).is_empty());
    assert_eq!(diff(&json!({}), &json!([])).len(), 1);
}

// ============================================================================
// Summary and boundary
// ============================================================================

#[test]
fn summary_counts_each_kind() {
    let a = json!({"a": 1, "b": 2, "c": [1, 2]});
    let b = json!({"b": 3, "c": [1, 2, 3], "d": 4});
    let summary = DiffSummary::from_changes(&diff(&a, &b));
    assert_eq!(
        summary,
        DiffSummary {
            added: 2,
            removed: 1,
            changed: 1
        }
    );
    assert_eq!(summary.to_string(), "2 added, 1 removed, 1 changed");
}

#[test]
fn changes_serialize_with_canonical_paths() {
    let changes = diff(&json!({"a": [1]}), &json!({"a": [2]}));
    let out = serde_json::to_value(&changes).unwrap();
    assert_eq!(
        out,
        json!([{"path": "a.0", "kind": "changed", "from": 1, "to": 2}])
    );

    let added = serde_json::to_value(diff(&json!({}), &json!({"k": true}))).unwrap();
    assert_eq!(added, json!([{"path": "k", "kind": "added", "to": true}]));
}

#[test]
fn malformed_input_names_its_source() {
    let err = parse_document("left.json", r#"{"x": }"#).unwrap_err();
    match &err {
        JsonDiffError::MalformedInput { source_name, .. } => assert_eq!(source_name, "left.json"),
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.to_string().starts_with("invalid JSON in left.json"));
}

#[test]
fn empty_input_is_malformed() {
    assert!(parse_document("empty.json", "").is_err());
    assert!(parse_document("ws.json", "   \n").is_err());
}
