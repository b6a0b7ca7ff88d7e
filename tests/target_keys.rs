//! Target-key dispatch through the full load path.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use confmap::{ConfigError, ConfigLoader, ConfigMap, ConfigResult, FnHandler, KeyHandler};
use serde_json::Value;

mod common;

/// Handler that extracts a social-media handle from its sub-tree.
struct HandleExtractor {
    keys: Vec<&'static str>,
    invocations: Arc<AtomicUsize>,
}

impl KeyHandler for HandleExtractor {
    fn handles(&self, key: &str) -> bool {
        self.keys.contains(&key)
    }

    fn process(&self, value: &Value, key: &str, map: &mut ConfigMap) -> ConfigResult<()> {
        self.invocations.fetch_add(1, Ordering::SeqCst);
        let handle = value
            .get("handle")
            .and_then(Value::as_str)
            .ok_or_else(|| ConfigError::Handler {
                key: key.to_string(),
                message: "missing 'handle' entry".to_string(),
            })?;
        map.insert(key, handle);
        Ok(())
    }
}

#[test]
fn test_handler_receives_value_and_key() {
    let file = common::write_config(r#"[{"twitter": {"handle": "x"}}]"#);
    let invocations = Arc::new(AtomicUsize::new(0));

    let loader = ConfigLoader::new(file.path()).with_handler(Box::new(HandleExtractor {
        keys: vec!["twitter", "tiktok"],
        invocations: invocations.clone(),
    }));
    let map = loader.load().unwrap();

    assert_eq!(invocations.load(Ordering::SeqCst), 1);
    assert_eq!(map.get("twitter").unwrap(), "x");
    // The generic walk never descended into the claimed sub-tree.
    assert!(map.get("handle").is_err());
}

#[test]
fn test_unclaimed_keys_still_walked_generically() {
    let file =
        common::write_config(r#"[{"twitter": {"handle": "x"}, "server": {"port": 8080}}]"#);

    let loader = ConfigLoader::new(file.path()).with_handler(Box::new(HandleExtractor {
        keys: vec!["twitter"],
        invocations: Arc::new(AtomicUsize::new(0)),
    }));
    let map = loader.load().unwrap();

    assert_eq!(map.get("twitter").unwrap(), "x");
    assert_eq!(map.get("port").unwrap(), "8080");
}

#[test]
fn test_target_key_claimed_below_root_level() {
    let file = common::write_config(r#"[{"accounts": {"twitter": {"handle": "x"}}}]"#);

    let loader = ConfigLoader::new(file.path()).with_handler(Box::new(HandleExtractor {
        keys: vec!["twitter"],
        invocations: Arc::new(AtomicUsize::new(0)),
    }));
    let map = loader.load().unwrap();

    assert_eq!(map.get("twitter").unwrap(), "x");
}

#[test]
fn test_handler_failure_aborts_load() {
    let file = common::write_config(r#"[{"twitter": {"name": "no handle here"}}]"#);

    let loader = ConfigLoader::new(file.path()).with_handler(Box::new(HandleExtractor {
        keys: vec!["twitter"],
        invocations: Arc::new(AtomicUsize::new(0)),
    }));

    let err = loader.load().unwrap_err();
    assert!(matches!(err, ConfigError::Handler { key, .. } if key == "twitter"));
}

#[test]
fn test_closure_handler_with_sections() {
    let file = common::write_config(
        r#"[{"server": {"port": 8080}}, {"endpoints": ["a.example.com", "b.example.com"]}]"#,
    );

    // The handler turns a list of addresses into indexed entries, which
    // the generic walk would reject (array elements must be objects).
    let loader = ConfigLoader::new(file.path()).with_handler(Box::new(FnHandler::new(
        "endpoints",
        |value: &Value, key: &str, map: &mut ConfigMap| {
            let list = value.as_array().ok_or_else(|| ConfigError::Handler {
                key: key.to_string(),
                message: "expected an array of addresses".to_string(),
            })?;
            for (i, entry) in list.iter().enumerate() {
                if let Some(address) = entry.as_str() {
                    map.insert(format!("endpoint_{i}"), address);
                }
            }
            Ok(())
        },
    )));

    let sections = loader.load_sections().unwrap();
    assert_eq!(sections.get("server", "port").unwrap(), "8080");
    assert_eq!(sections.get("endpoints", "endpoint_0").unwrap(), "a.example.com");
    assert_eq!(sections.get("endpoints", "endpoint_1").unwrap(), "b.example.com");
}
