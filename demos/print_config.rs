//! Load a configuration file and print the resulting nested map.
//!
//! Usage: cargo run --example print_config [path]

use confmap::{ConfigError, ConfigLoader, ConfigMap, FnHandler};
use serde_json::Value;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "confmap=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "demos/config.json".to_string());

    let loader = ConfigLoader::new(&path).with_handler(Box::new(FnHandler::new(
        "twitter",
        |value: &Value, key: &str, map: &mut ConfigMap| {
            let handle = value
                .get("handle")
                .and_then(Value::as_str)
                .ok_or_else(|| ConfigError::Handler {
                    key: key.to_string(),
                    message: "missing 'handle' entry".to_string(),
                })?;
            map.insert(key, handle);
            Ok(())
        },
    )));

    let sections = loader.load_sections()?;
    for (section, settings) in sections.iter() {
        println!("{section}:");
        for (key, value) in settings.iter() {
            println!("  {key}: {value}");
        }
    }

    Ok(())
}
