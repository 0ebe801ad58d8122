//! Common test utilities for block tests

use std::collections::HashMap;
use std::sync::Once;

use dictplus::{Dictionaries, Output};

static INIT_TRACING: Once = Once::new();

/// Route tracing output through the test harness
pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::DEBUG)
            .try_init();
    });
}

/// Fresh store with default configuration
pub fn create_dicts() -> Dictionaries {
    init_tracing();
    Dictionaries::new()
}

/// Store preloaded with `data` under `name`
pub fn loaded(name: &str, data: &str) -> Dictionaries {
    let mut dicts = create_dicts();
    dicts.manage(name, "load JSON", data).unwrap();
    dicts
}

/// Flat argument map as the host passes it
pub fn args(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Extract text from Output::Text
#[allow(dead_code)]
pub fn extract_text(output: &Output) -> &str {
    match output {
        Output::Text(s) => s,
        _ => panic!("Expected Output::Text, got {:?}", output),
    }
}

/// Parse a stringified document for structural comparison
pub fn parsed(text: &str) -> serde_json::Value {
    serde_json::from_str(text).unwrap()
}
