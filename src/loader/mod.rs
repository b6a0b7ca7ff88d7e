//! Configuration loading from disk.
//!
//! # Data Flow
//! ```text
//! config file (JSON)
//!     → read & parse (serde_json)
//!     → validate root shape (must be an array of objects)
//!     → walker (flat or sectioned traversal)
//!     → ConfigMap / SectionedMap returned by value
//! ```
//!
//! # Design Decisions
//! - The loader owns nothing global: each call builds a fresh map, so a
//!   failed load never leaks a partially populated result
//! - All failures are typed errors; the caller decides whether to abort
//! - Handlers are registered on the loader and consulted on every walk

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{ConfigError, ConfigResult};
use crate::handler::{HandlerRegistry, KeyHandler};
use crate::map::{ConfigMap, SectionedMap};
use crate::walker::Walker;

/// Loads a JSON configuration file into string maps.
pub struct ConfigLoader {
    path: PathBuf,
    registry: HandlerRegistry,
}

impl ConfigLoader {
    /// Create a loader for the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            registry: HandlerRegistry::new(),
        }
    }

    /// Register a target-key handler, builder style.
    pub fn with_handler(mut self, handler: Box<dyn KeyHandler>) -> Self {
        self.registry.register(handler);
        self
    }

    /// Register a target-key handler.
    pub fn register_handler(&mut self, handler: Box<dyn KeyHandler>) {
        self.registry.register(handler);
    }

    /// The configured file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the file into a flat map.
    pub fn load(&self) -> ConfigResult<ConfigMap> {
        let root = self.parse_file()?;
        let elements = validate_root(&root)?;

        let mut map = ConfigMap::new();
        Walker::new(&self.registry)
            .walk_root(elements, &mut map)
            .map_err(|e| {
                tracing::error!(path = %self.path.display(), error = %e, "Error processing configuration file");
                e
            })?;

        tracing::debug!(
            path = %self.path.display(),
            entries = map.len(),
            "Configuration loaded"
        );
        Ok(map)
    }

    /// Load the file into a sectioned map, grouping settings under the
    /// root-level member they were found beneath.
    pub fn load_sections(&self) -> ConfigResult<SectionedMap> {
        let root = self.parse_file()?;
        let elements = validate_root(&root)?;

        let mut map = SectionedMap::new();
        Walker::new(&self.registry)
            .walk_root_sections(elements, &mut map)
            .map_err(|e| {
                tracing::error!(path = %self.path.display(), error = %e, "Error processing configuration file");
                e
            })?;

        tracing::debug!(
            path = %self.path.display(),
            sections = map.len(),
            "Configuration loaded"
        );
        Ok(map)
    }

    fn parse_file(&self) -> ConfigResult<Value> {
        if self.path.as_os_str().is_empty() {
            tracing::error!("Configuration file path is empty");
            return Err(ConfigError::EmptyPath);
        }

        tracing::debug!(path = %self.path.display(), "Loading configuration file");

        let content = fs::read_to_string(&self.path).map_err(|source| {
            tracing::error!(path = %self.path.display(), error = %source, "Could not read config file");
            ConfigError::Io {
                path: self.path.clone(),
                source,
            }
        })?;

        serde_json::from_str(&content).map_err(|source| {
            tracing::error!(path = %self.path.display(), error = %source, "Failed to parse JSON");
            ConfigError::Parse {
                path: self.path.clone(),
                source,
            }
        })
    }
}

/// Validate the top-level shape: the document root must be an array.
///
/// Returns the root's elements so the walk can proceed without
/// re-checking the shape.
pub fn validate_root(root: &Value) -> ConfigResult<&[Value]> {
    match root {
        Value::Array(elements) => Ok(elements),
        _ => {
            tracing::error!("Config root is not an array of JSON objects");
            Err(ConfigError::InvalidRootShape)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_validate_root_accepts_array() {
        let root = json!([{"a": {"b": "c"}}]);
        assert!(validate_root(&root).is_ok());
    }

    #[test]
    fn test_validate_root_rejects_object_and_scalar() {
        assert!(matches!(
            validate_root(&json!({"a": 1})),
            Err(ConfigError::InvalidRootShape)
        ));
        assert!(matches!(
            validate_root(&json!("string")),
            Err(ConfigError::InvalidRootShape)
        ));
    }

    #[test]
    fn test_empty_path_rejected() {
        let loader = ConfigLoader::new("");
        assert!(matches!(loader.load(), Err(ConfigError::EmptyPath)));
    }

    #[test]
    fn test_missing_file_rejected() {
        let loader = ConfigLoader::new("/nonexistent/config.json");
        assert!(matches!(loader.load(), Err(ConfigError::Io { .. })));
    }
}
