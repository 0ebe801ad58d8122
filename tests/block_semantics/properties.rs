//! Properties over generated documents

use crate::common::*;
use proptest::prelude::*;
use serde_json::{Map, Value};

fn arb_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i32>().prop_map(Value::from),
        "[a-z ]{0,8}".prop_map(Value::from),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::btree_map("[a-z]{1,4}", inner, 0..4)
                .prop_map(|m| Value::Object(m.into_iter().collect::<Map<_, _>>())),
        ]
    })
}

fn arb_document() -> impl Strategy<Value = Value> {
    prop::collection::btree_map("[a-z]{1,4}", arb_value(), 0..5)
        .prop_map(|m| Value::Object(m.into_iter().collect::<Map<_, _>>()))
}

/// Writes that touch `key` and anything below it
fn scribble(dicts: &mut dictplus::Dictionaries, dict: &str, key: &str) {
    dicts.manage_key(dict, key, "push", "x").unwrap();
    dicts.manage_key(dict, &format!("{}.0", key), "set to", "y").unwrap();
    dicts.manage_key(dict, &format!("{}.inner", key), "set to", "z").unwrap();
    dicts.manage_key(dict, key, "change by", "1").unwrap();
    dicts.manage_key(dict, &format!("{}.0", key), "delete", "").unwrap();
}

proptest! {
    #[test]
    fn clone_then_mutate_never_changes_source(doc in arb_document(), key in "[a-z]{1,4}") {
        let mut dicts = create_dicts();
        dicts.manage("src", "load JSON", &doc.to_string()).unwrap();
        let before = dicts.stringify("src").unwrap();

        dicts.clone_dict("src", "dest").unwrap();
        prop_assert_eq!(dicts.stringify("dest").unwrap(), before.clone());

        scribble(&mut dicts, "dest", &key);
        prop_assert_eq!(dicts.stringify("src").unwrap(), before);
    }

    #[test]
    fn merge_then_mutate_never_changes_source(
        src in arb_document(),
        dest in arb_document(),
        key in "[a-z]{1,4}",
    ) {
        let mut dicts = create_dicts();
        dicts.manage("src", "load JSON", &src.to_string()).unwrap();
        dicts.manage("dest", "load JSON", &dest.to_string()).unwrap();
        let before = dicts.stringify("src").unwrap();

        dicts.merge("src", "dest").unwrap();
        scribble(&mut dicts, "dest", &key);
        prop_assert_eq!(dicts.stringify("src").unwrap(), before);
    }

    #[test]
    fn merged_source_keys_win(src in arb_document(), dest in arb_document()) {
        let mut dicts = create_dicts();
        dicts.manage("src", "load JSON", &src.to_string()).unwrap();
        dicts.manage("dest", "load JSON", &dest.to_string()).unwrap();
        dicts.merge("src", "dest").unwrap();

        let merged = parsed(&dicts.stringify("dest").unwrap());
        for (key, value) in src.as_object().unwrap() {
            let both_objects = value.is_object()
                && dest.get(key).map_or(false, Value::is_object);
            if !both_objects {
                prop_assert_eq!(&merged[key], value);
            }
        }
    }
}
