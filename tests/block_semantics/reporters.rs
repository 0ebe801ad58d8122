//! Reporter and boolean blocks

use crate::common::*;
use dictplus::Output;
use serde_json::json;

// ============================================================================
// Missing data
// ============================================================================

#[test]
fn missing_document_reads_as_sentinels() {
    let mut dicts = create_dicts();

    assert_eq!(dicts.get("nope", "a.b").unwrap(), Output::Text("undefined".into()));
    assert_eq!(dicts.length("nope", "a").unwrap(), 0.0);
    assert_eq!(dicts.keys("nope", "").unwrap(), "[]");
    assert_eq!(dicts.type_of("nope", "").unwrap(), "undefined");
    assert_eq!(dicts.stringify("nope").unwrap(), "{}");
    assert!(!dicts.check_prop("nope", "", "is defined").unwrap());
}

#[test]
fn unresolved_path_reads_as_sentinels() {
    let mut dicts = loaded("foo", r#"{"a": 5}"#);

    assert_eq!(dicts.get("foo", "a.b.c").unwrap(), Output::Text("undefined".into()));
    assert_eq!(dicts.type_of("foo", "missing").unwrap(), "undefined");
    assert_eq!(dicts.keys("foo", "a").unwrap(), "[]");
    assert_eq!(dicts.length("foo", "a").unwrap(), 0.0);
    assert!(!dicts.check_prop("foo", "a.b", "is defined").unwrap());
}

#[test]
fn reads_never_create_documents() {
    let mut dicts = create_dicts();
    dicts.get("ghost", "a.b").unwrap();
    dicts.length("ghost", "").unwrap();
    assert_eq!(dicts.list().unwrap(), "[]");
}

// ============================================================================
// Values
// ============================================================================

#[test]
fn get_formats_by_type() {
    let mut dicts = loaded(
        "foo",
        r#"{"s": "hi", "n": 1.5, "b": false, "z": null, "arr": [1, 2], "obj": {"k": "v"}}"#,
    );

    assert_eq!(dicts.get("foo", "s").unwrap(), Output::Text("hi".into()));
    assert_eq!(dicts.get("foo", "n").unwrap(), Output::Number(1.5));
    assert_eq!(dicts.get("foo", "b").unwrap(), Output::Bool(false));
    assert_eq!(dicts.get("foo", "z").unwrap(), Output::Text("null".into()));
    assert_eq!(dicts.get("foo", "arr").unwrap(), Output::Text("[1,2]".into()));
    assert_eq!(dicts.get("foo", "obj").unwrap(), Output::Text(r#"{"k":"v"}"#.into()));
}

#[test]
fn empty_path_reads_whole_document() {
    let mut dicts = loaded("foo", r#"{"a": 1, "b": [true]}"#);

    let whole = dicts.get("foo", "").unwrap();
    assert_eq!(parsed(extract_text(&whole)), json!({"a": 1, "b": [true]}));
    assert_eq!(dicts.keys("foo", "").unwrap(), r#"["a","b"]"#);
    assert_eq!(dicts.length("foo", "").unwrap(), 2.0);
    assert_eq!(dicts.type_of("foo", "").unwrap(), "object");
}

#[test]
fn type_names() {
    let mut dicts = loaded("foo", r#"{"s": "", "n": 0, "b": true, "z": null, "a": [], "o": {}}"#);

    assert_eq!(dicts.type_of("foo", "s").unwrap(), "string");
    assert_eq!(dicts.type_of("foo", "n").unwrap(), "number");
    assert_eq!(dicts.type_of("foo", "b").unwrap(), "boolean");
    assert_eq!(dicts.type_of("foo", "z").unwrap(), "null");
    assert_eq!(dicts.type_of("foo", "a").unwrap(), "array");
    assert_eq!(dicts.type_of("foo", "o").unwrap(), "object");
}

#[test]
fn array_paths_use_indices() {
    let mut dicts = loaded("foo", r#"{"rows": [{"id": 7}, {"id": 8}]}"#);

    assert_eq!(dicts.get("foo", "rows.1.id").unwrap(), Output::Number(8.0));
    assert_eq!(dicts.keys("foo", "rows").unwrap(), r#"["0","1"]"#);
    assert_eq!(dicts.get("foo", "rows.5").unwrap(), Output::Text("undefined".into()));
}

#[test]
fn escaped_dots_stay_in_keys() {
    let mut dicts = loaded("foo", r#"{"a.b": {"c": 1}}"#);

    assert_eq!(dicts.get("foo", r"a\.b.c").unwrap(), Output::Number(1.0));
    assert_eq!(dicts.get("foo", "a.b.c").unwrap(), Output::Text("undefined".into()));
}

#[test]
fn length_counts_utf16_units() {
    let mut dicts = loaded("foo", r#"{"word": "héllo", "emoji": "😀"}"#);

    assert_eq!(dicts.length("foo", "word").unwrap(), 5.0);
    assert_eq!(dicts.length("foo", "emoji").unwrap(), 2.0);
}

// ============================================================================
// Property checks
// ============================================================================

#[test]
fn check_prop_variants() {
    let mut dicts = loaded("foo", r#"{"z": null, "a": [], "o": {}}"#);

    assert!(dicts.check_prop("foo", "z", "is defined").unwrap());
    assert!(dicts.check_prop("foo", "z", "is null").unwrap());
    assert!(dicts.check_prop("foo", "a", "is array").unwrap());
    assert!(!dicts.check_prop("foo", "a", "is dictionary").unwrap());
    assert!(dicts.check_prop("foo", "o", "is dictionary").unwrap());
    assert!(!dicts.check_prop("foo", "missing", "is null").unwrap());
}

#[test]
fn check_prop_on_document_itself() {
    let mut dicts = loaded("list", "[1, 2]");

    assert!(dicts.check_prop("list", "", "is defined").unwrap());
    assert!(dicts.check_prop("list", "", "is array").unwrap());
    assert!(!dicts.check_prop("list", "", "is dictionary").unwrap());
}

#[test]
fn unknown_check_is_false() {
    let mut dicts = loaded("foo", r#"{"a": 1}"#);
    assert!(!dicts.check_prop("foo", "a", "is shiny").unwrap());
}

#[test]
fn forbidden_segments_never_resolve() {
    let mut dicts = loaded("foo", r#"{"a": {"b": 1}}"#);

    assert_eq!(
        dicts.get("foo", "__proto__.b").unwrap(),
        Output::Text("undefined".into())
    );
    assert!(!dicts.check_prop("foo", "constructor", "is defined").unwrap());
}
