//! Host invocation: opcodes, flat arguments, lifecycle and configuration

use crate::common::*;
use dictplus::{
    opcode, BlockType, Dictionaries, DictionariesConfig, Error, Executor, Output,
    CONFIG_FILE_NAME,
};
use tempfile::TempDir;

#[test]
fn blocks_round_trip_through_opcodes() {
    init_tracing();
    let mut executor = Executor::new();

    let set = executor
        .execute_block(
            opcode::MANAGE_KEY,
            &args(&[("DICT", "foo"), ("KEY", "bar"), ("ACTION", "set to"), ("VAL", "baz")]),
        )
        .unwrap();
    assert_eq!(set, Output::Unit);

    let got = executor
        .execute_block(opcode::GET, &args(&[("DICT", "foo"), ("KEY", "bar")]))
        .unwrap();
    assert_eq!(got, Output::Text("baz".into()));

    let defined = executor
        .execute_block(
            opcode::CHECK_PROP,
            &args(&[("DICT", "foo"), ("KEY", "bar"), ("CHECK", "is defined")]),
        )
        .unwrap();
    assert_eq!(defined, Output::Bool(true));

    let listed = executor.execute_block(opcode::LIST, &args(&[])).unwrap();
    assert_eq!(listed, Output::Text(r#"["foo"]"#.into()));
}

#[test]
fn extra_arguments_are_ignored() {
    let mut executor = Executor::new();
    let out = executor
        .execute_block(
            opcode::LENGTH,
            &args(&[("DICT", "foo"), ("KEY", ""), ("mutation", "<xml/>")]),
        )
        .unwrap();
    assert_eq!(out, Output::Number(0.0));
}

#[test]
fn missing_argument_is_reported() {
    let mut executor = Executor::new();
    let err = executor
        .execute_block(opcode::CLONE, &args(&[("SRC", "a")]))
        .unwrap_err();

    assert_eq!(
        err,
        Error::MissingArgument {
            opcode: "dict_clone".into(),
            name: "DEST".into(),
        }
    );
    assert!(executor.store().is_empty());
}

#[test]
fn unknown_opcode_is_reported() {
    let mut executor = Executor::new();
    let err = executor
        .execute_block("dict_sort", &args(&[("DICT", "foo")]))
        .unwrap_err();
    assert!(matches!(err, Error::UnknownOpcode { .. }));
}

#[test]
fn numbers_render_like_the_host() {
    let mut dicts = create_dicts();
    dicts.manage_key("foo", "n", "change by", "2").unwrap();
    dicts.manage_key("foo", "f", "change by", "0.25").unwrap();

    assert_eq!(dicts.get("foo", "n").unwrap().to_string(), "2");
    assert_eq!(dicts.get("foo", "f").unwrap().to_string(), "0.25");
}

// ============================================================================
// Lifecycle
// ============================================================================

#[test]
fn dispose_clears_documents_by_default() {
    let mut dicts = loaded("foo", r#"{"a": 1}"#);
    dicts.dispose();
    assert_eq!(dicts.list().unwrap(), "[]");
}

#[test]
fn dispose_can_keep_documents() {
    let mut dicts = Dictionaries::with_config(DictionariesConfig {
        clear_on_dispose: false,
        ..DictionariesConfig::default()
    });
    dicts.manage("foo", "load JSON", "[1]").unwrap();
    dicts.dispose();
    assert_eq!(dicts.stringify("foo").unwrap(), "[1]");
}

#[test]
fn independent_stores_do_not_share_documents() {
    let mut first = create_dicts();
    let mut second = create_dicts();
    first.manage_key("foo", "a", "set to", "1").unwrap();

    assert_eq!(second.list().unwrap(), "[]");
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn open_writes_default_config() {
    let dir = TempDir::new().unwrap();
    let dicts = Dictionaries::open(dir.path()).unwrap();

    assert!(dir.path().join(CONFIG_FILE_NAME).exists());
    assert_eq!(dicts.info().id, DictionariesConfig::default().id);
}

#[test]
fn open_reads_existing_config() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join(CONFIG_FILE_NAME),
        "name = \"My Dicts\"\ncolor1 = \"#112233\"\nclear_on_dispose = false\n",
    )
    .unwrap();

    let mut dicts = Dictionaries::open(dir.path()).unwrap();
    let info = dicts.info();
    assert_eq!(info.name, "My Dicts");
    assert_eq!(info.color1, "#112233");

    dicts.manage("foo", "load JSON", "{}").unwrap();
    dicts.dispose();
    assert_eq!(dicts.list().unwrap(), r#"["foo"]"#);
}

#[test]
fn open_rejects_bad_config() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(CONFIG_FILE_NAME), "color1 = \"purple\"\n").unwrap();

    assert!(matches!(
        Dictionaries::open(dir.path()),
        Err(Error::Config { .. })
    ));
}

#[test]
fn catalog_lists_every_block() {
    let dicts = create_dicts();
    let info = dicts.info();

    for op in opcode::ALL {
        assert!(info.block(op).is_some(), "no block for {}", op);
    }
    assert_eq!(info.block(opcode::CHECK_PROP).unwrap().block_type, BlockType::Boolean);
}
