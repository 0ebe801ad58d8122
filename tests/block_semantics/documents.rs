//! Document-level actions: load, clear, delete, clone, merge

use crate::common::*;
use dictplus::Output;
use serde_json::json;

// ============================================================================
// manage
// ============================================================================

#[test]
fn load_json_replaces_document() {
    let mut dicts = loaded("foo", r#"{"a": 1}"#);
    dicts.manage("foo", "load JSON", r#"{"b": [1, 2]}"#).unwrap();

    assert_eq!(dicts.stringify("foo").unwrap(), r#"{"b":[1,2]}"#);
}

#[test]
fn load_invalid_json_stores_placeholder() {
    let mut dicts = loaded("foo", "not json");

    assert_eq!(dicts.stringify("foo").unwrap(), r#"{"error":"Invalid JSON"}"#);
    assert_eq!(dicts.type_of("foo", "error").unwrap(), "string");
}

#[test]
fn load_scalar_json_stores_placeholder() {
    let mut dicts = loaded("foo", "42");

    assert_eq!(
        dicts.get("foo", "error").unwrap(),
        Output::Text("Invalid JSON Structure".into())
    );
}

#[test]
fn load_sanitizes_every_depth() {
    let mut dicts = loaded(
        "foo",
        r#"{"__proto__": 1, "a": {"constructor": {"x": 1}, "b": [{"prototype": 0, "c": 2}]}}"#,
    );

    assert_eq!(
        parsed(&dicts.stringify("foo").unwrap()),
        json!({"a": {"b": [{"c": 2}]}})
    );
}

#[test]
fn clear_keeps_container_kind() {
    let mut dicts = loaded("obj", r#"{"a": 1}"#);
    dicts.manage("list", "load JSON", "[1, 2, 3]").unwrap();

    dicts.manage("obj", "clear", "").unwrap();
    dicts.manage("list", "clear", "").unwrap();

    assert_eq!(dicts.stringify("obj").unwrap(), "{}");
    assert_eq!(dicts.stringify("list").unwrap(), "[]");
}

#[test]
fn clear_and_delete_ignore_missing_documents() {
    let mut dicts = create_dicts();
    dicts.manage("ghost", "clear", "").unwrap();
    dicts.manage("ghost", "delete", "").unwrap();

    assert_eq!(dicts.list().unwrap(), "[]");
}

#[test]
fn delete_removes_document() {
    let mut dicts = loaded("foo", r#"{"a": 1}"#);
    dicts.manage("foo", "delete", "").unwrap();

    assert_eq!(dicts.list().unwrap(), "[]");
    assert_eq!(dicts.stringify("foo").unwrap(), "{}");
}

#[test]
fn unknown_document_action_does_nothing() {
    let mut dicts = create_dicts();
    dicts.manage("foo", "shred", r#"{"a": 1}"#).unwrap();

    assert_eq!(dicts.list().unwrap(), "[]");
}

#[test]
fn list_names_every_document() {
    let mut dicts = loaded("a", "{}");
    dicts.manage("b", "load JSON", "[]").unwrap();

    let mut names: Vec<String> = serde_json::from_str(&dicts.list().unwrap()).unwrap();
    names.sort();
    assert_eq!(names, vec!["a", "b"]);
}

// ============================================================================
// clone
// ============================================================================

#[test]
fn clone_is_independent() {
    let mut dicts = loaded("src", r#"{"nested": {"list": [1]}}"#);
    dicts.clone_dict("src", "copy").unwrap();

    dicts.manage_key("copy", "nested.list", "push", "2").unwrap();
    dicts.manage_key("copy", "nested.extra", "set to", "x").unwrap();

    assert_eq!(dicts.stringify("src").unwrap(), r#"{"nested":{"list":[1]}}"#);
    assert_eq!(
        dicts.stringify("copy").unwrap(),
        r#"{"nested":{"list":[1,"2"],"extra":"x"}}"#
    );
}

#[test]
fn clone_overwrites_destination() {
    let mut dicts = loaded("src", "[1]");
    dicts.manage("dest", "load JSON", r#"{"old": true}"#).unwrap();
    dicts.clone_dict("src", "dest").unwrap();

    assert_eq!(dicts.stringify("dest").unwrap(), "[1]");
}

#[test]
fn clone_of_missing_source_is_ignored() {
    let mut dicts = loaded("dest", r#"{"keep": 1}"#);
    dicts.clone_dict("ghost", "dest").unwrap();

    assert_eq!(dicts.stringify("dest").unwrap(), r#"{"keep":1}"#);
}

// ============================================================================
// merge
// ============================================================================

#[test]
fn merge_recurses_into_mappings() {
    let mut dicts = loaded(
        "dest",
        r#"{"name": "old", "stats": {"hp": 10, "mp": 5}, "tags": ["a"]}"#,
    );
    dicts
        .manage("src", "load JSON", r#"{"name": "new", "stats": {"hp": 20}, "tags": ["b"], "x": 1}"#)
        .unwrap();
    dicts.merge("src", "dest").unwrap();

    assert_eq!(
        dicts.stringify("dest").unwrap(),
        r#"{"name":"new","stats":{"hp":20,"mp":5},"tags":["b"],"x":1}"#
    );
}

#[test]
fn merged_values_are_copies() {
    let mut dicts = loaded("dest", "{}");
    dicts.manage("src", "load JSON", r#"{"list": [1], "obj": {"k": 1}}"#).unwrap();
    dicts.merge("src", "dest").unwrap();

    dicts.manage_key("dest", "list", "push", "2").unwrap();
    dicts.manage_key("dest", "obj.k", "change by", "1").unwrap();

    assert_eq!(dicts.stringify("src").unwrap(), r#"{"list":[1],"obj":{"k":1}}"#);
    assert_eq!(dicts.stringify("dest").unwrap(), r#"{"list":[1,"2"],"obj":{"k":2}}"#);
}

#[test]
fn merge_into_missing_destination_clones() {
    let mut dicts = loaded("src", r#"{"a": [1]}"#);
    dicts.merge("src", "dest").unwrap();
    dicts.manage_key("dest", "a", "push", "2").unwrap();

    assert_eq!(dicts.stringify("src").unwrap(), r#"{"a":[1]}"#);
    assert_eq!(dicts.stringify("dest").unwrap(), r#"{"a":[1,"2"]}"#);
}

#[test]
fn merge_across_kinds_replaces() {
    let mut dicts = loaded("src", "[1, 2]");
    dicts.manage("dest", "load JSON", r#"{"a": 1}"#).unwrap();
    dicts.merge("src", "dest").unwrap();

    assert_eq!(dicts.stringify("dest").unwrap(), "[1,2]");
}

#[test]
fn merge_from_missing_source_is_ignored() {
    let mut dicts = loaded("dest", r#"{"a": 1}"#);
    dicts.merge("ghost", "dest").unwrap();

    assert_eq!(dicts.stringify("dest").unwrap(), r#"{"a":1}"#);
    assert_eq!(dicts.list().unwrap(), r#"["dest"]"#);
}
