//! Key-level actions: set to, change by, push, delete

use crate::common::*;
use dictplus::Output;
use serde_json::json;

// ============================================================================
// set to
// ============================================================================

#[test]
fn set_keeps_plain_text_as_string() {
    let mut dicts = create_dicts();
    dicts.manage_key("foo", "a.b", "set to", "5").unwrap();

    assert_eq!(dicts.get("foo", "a.b").unwrap(), Output::Text("5".into()));
    assert_eq!(dicts.type_of("foo", "a.b").unwrap(), "string");
}

#[test]
fn set_parses_structures() {
    let mut dicts = create_dicts();
    dicts.manage_key("foo", "a", "set to", r#"{"x": 1}"#).unwrap();

    assert_eq!(dicts.get("foo", "a.x").unwrap(), Output::Number(1.0));
}

#[test]
fn set_creates_intermediate_containers() {
    let mut dicts = create_dicts();
    dicts.manage_key("foo", "a.b.c", "set to", "deep").unwrap();
    dicts.manage_key("foo", "grid.0.0", "set to", "x").unwrap();

    assert_eq!(
        parsed(&dicts.stringify("foo").unwrap()),
        json!({"a": {"b": {"c": "deep"}}, "grid": [["x"]]})
    );
}

#[test]
fn set_past_end_pads_with_null() {
    let mut dicts = loaded("foo", r#"{"list": ["a"]}"#);
    dicts.manage_key("foo", "list.2", "set to", "c").unwrap();

    assert_eq!(dicts.stringify("foo").unwrap(), r#"{"list":["a",null,"c"]}"#);
}

#[test]
fn set_at_root_replaces_document() {
    let mut dicts = loaded("foo", r#"{"old": true}"#);
    dicts.manage_key("foo", "", "set to", "[1, 2]").unwrap();
    assert_eq!(dicts.stringify("foo").unwrap(), "[1,2]");

    // Plain text cannot replace a document
    dicts.manage_key("foo", "", "set to", "hello").unwrap();
    assert_eq!(dicts.stringify("foo").unwrap(), "[1,2]");
}

#[test]
fn set_strips_forbidden_keys_from_values() {
    let mut dicts = create_dicts();
    dicts
        .manage_key("foo", "cfg", "set to", r#"{"__proto__": {"x": 1}, "ok": [{"prototype": 2}]}"#)
        .unwrap();

    assert_eq!(dicts.stringify("foo").unwrap(), r#"{"cfg":{"ok":[{}]}}"#);
}

#[test]
fn set_through_forbidden_segment_is_ignored() {
    let mut dicts = loaded("foo", "{}");
    dicts.manage_key("foo", "__proto__.polluted", "set to", "yes").unwrap();
    dicts.manage_key("foo", "constructor", "set to", "yes").unwrap();

    assert_eq!(dicts.stringify("foo").unwrap(), "{}");
}

#[test]
fn set_at_unreachable_index_is_ignored() {
    let mut dicts = loaded("foo", r#"{"l": []}"#);
    dicts.manage_key("foo", "l.18446744073709551615", "set to", "x").unwrap();
    dicts.manage_key("foo", "l.18446744073709551615.x", "push", "x").unwrap();
    dicts.manage_key("foo", "l.18446744073709551615", "change by", "1").unwrap();

    assert_eq!(dicts.stringify("foo").unwrap(), r#"{"l":[]}"#);
}

// ============================================================================
// change by
// ============================================================================

#[test]
fn change_starts_missing_keys_at_zero() {
    let mut dicts = create_dicts();
    dicts.manage_key("foo", "n", "change by", "3").unwrap();

    assert_eq!(dicts.get("foo", "n").unwrap(), Output::Number(3.0));
    assert_eq!(dicts.stringify("foo").unwrap(), r#"{"n":3}"#);
}

#[test]
fn change_coerces_both_sides() {
    let mut dicts = create_dicts();
    dicts.manage_key("foo", "hp", "set to", "10").unwrap();
    dicts.manage_key("foo", "hp", "change by", "-2.5").unwrap();
    assert_eq!(dicts.get("foo", "hp").unwrap(), Output::Number(7.5));

    dicts.manage_key("foo", "hp", "change by", "lots").unwrap();
    assert_eq!(dicts.get("foo", "hp").unwrap(), Output::Number(7.5));

    dicts.manage_key("foo", "hp", "change by", "0.5").unwrap();
    assert_eq!(dicts.stringify("foo").unwrap(), r#"{"hp":8}"#);
}

#[test]
fn change_leaves_containers_alone() {
    let mut dicts = loaded("foo", r#"{"o": {}, "a": [1]}"#);
    dicts.manage_key("foo", "o", "change by", "1").unwrap();
    dicts.manage_key("foo", "a", "change by", "1").unwrap();

    assert_eq!(dicts.stringify("foo").unwrap(), r#"{"o":{},"a":[1]}"#);
}

// ============================================================================
// push
// ============================================================================

#[test]
fn push_accumulates_into_new_list() {
    let mut dicts = create_dicts();
    dicts.manage_key("foo", "list", "push", "a").unwrap();
    dicts.manage_key("foo", "list", "push", "b").unwrap();

    assert_eq!(dicts.length("foo", "list").unwrap(), 2.0);
    assert_eq!(dicts.keys("foo", "list").unwrap(), r#"["0","1"]"#);
    assert_eq!(dicts.stringify("foo").unwrap(), r#"{"list":["a","b"]}"#);
}

#[test]
fn push_wraps_scalars() {
    let mut dicts = loaded("foo", r#"{"s": "first", "z": null}"#);
    dicts.manage_key("foo", "s", "push", "second").unwrap();
    dicts.manage_key("foo", "z", "push", "x").unwrap();

    assert_eq!(
        parsed(&dicts.stringify("foo").unwrap()),
        json!({"s": ["first", "second"], "z": [null, "x"]})
    );
}

#[test]
fn push_parses_structures() {
    let mut dicts = create_dicts();
    dicts.manage_key("foo", "rows", "push", r#"{"id": 1}"#).unwrap();

    assert_eq!(dicts.get("foo", "rows.0.id").unwrap(), Output::Number(1.0));
}

#[test]
fn push_onto_object_is_ignored() {
    let mut dicts = loaded("foo", r#"{"o": {"k": 1}}"#);
    dicts.manage_key("foo", "o", "push", "x").unwrap();

    assert_eq!(dicts.stringify("foo").unwrap(), r#"{"o":{"k":1}}"#);
}

#[test]
fn push_at_root() {
    let mut dicts = loaded("list", "[1]");
    dicts.manage_key("list", "", "push", "2").unwrap();
    assert_eq!(dicts.stringify("list").unwrap(), r#"[1,"2"]"#);

    let mut dicts = loaded("obj", "{}");
    dicts.manage_key("obj", "", "push", "2").unwrap();
    assert_eq!(dicts.stringify("obj").unwrap(), "{}");
}

// ============================================================================
// delete
// ============================================================================

#[test]
fn delete_shifts_sequence_elements() {
    let mut dicts = loaded("foo", r#"{"list": ["a", "b", "c"]}"#);
    dicts.manage_key("foo", "list.0", "delete", "").unwrap();

    assert_eq!(dicts.stringify("foo").unwrap(), r#"{"list":["b","c"]}"#);
    assert_eq!(dicts.get("foo", "list.0").unwrap(), Output::Text("b".into()));
}

#[test]
fn delete_with_bad_index_is_ignored() {
    let mut dicts = loaded("foo", r#"{"list": ["a", "b"]}"#);
    for key in ["list.9", "list.x", "list.1.5", "list.-1"] {
        dicts.manage_key("foo", key, "delete", "").unwrap();
    }

    assert_eq!(dicts.stringify("foo").unwrap(), r#"{"list":["a","b"]}"#);
}

#[test]
fn delete_mapping_key_keeps_order() {
    let mut dicts = loaded("foo", r#"{"a": 1, "b": 2, "c": 3}"#);
    dicts.manage_key("foo", "b", "delete", "").unwrap();

    assert_eq!(dicts.stringify("foo").unwrap(), r#"{"a":1,"c":3}"#);
}

#[test]
fn delete_root_removes_document() {
    let mut dicts = loaded("foo", r#"{"a": 1}"#);
    dicts.manage_key("foo", "", "delete", "").unwrap();

    assert_eq!(dicts.list().unwrap(), "[]");
}

#[test]
fn unknown_action_only_creates_document() {
    let mut dicts = create_dicts();
    dicts.manage_key("foo", "a.b", "explode", "x").unwrap();

    assert_eq!(dicts.list().unwrap(), r#"["foo"]"#);
    assert_eq!(dicts.stringify("foo").unwrap(), "{}");
}
