//! Target-key handling.
//!
//! # Responsibilities
//! - Define the capability for intercepting specific keys during the walk
//! - Keep the registered collection of handlers and dispatch to them
//!
//! # Design Decisions
//! - One trait covers all handler styles; a closure adapter exists for
//!   inline handlers so callers rarely need a named type
//! - A key claimed by any handler is never walked generically; the claim
//!   check runs before the generic type dispatch
//! - When several handlers claim the same key, the first registered wins

use serde_json::Value;

use crate::error::ConfigResult;
use crate::map::ConfigMap;

/// Capability for intercepting a key during the configuration walk.
///
/// Implementations receive the raw JSON value found under the key and
/// write whatever entries they produce into the map themselves, instead
/// of the walker's generic string-or-integer storage.
pub trait KeyHandler: Send + Sync {
    /// Returns true if this handler wants the given key.
    fn handles(&self, key: &str) -> bool;

    /// Consume the value found under `key`.
    fn process(&self, value: &Value, key: &str, map: &mut ConfigMap) -> ConfigResult<()>;
}

/// A [`KeyHandler`] built from a fixed key and a closure.
pub struct FnHandler<F> {
    key: String,
    func: F,
}

impl<F> FnHandler<F>
where
    F: Fn(&Value, &str, &mut ConfigMap) -> ConfigResult<()> + Send + Sync,
{
    /// Create a handler claiming exactly `key`.
    pub fn new(key: impl Into<String>, func: F) -> Self {
        Self {
            key: key.into(),
            func,
        }
    }
}

impl<F> KeyHandler for FnHandler<F>
where
    F: Fn(&Value, &str, &mut ConfigMap) -> ConfigResult<()> + Send + Sync,
{
    fn handles(&self, key: &str) -> bool {
        self.key == key
    }

    fn process(&self, value: &Value, key: &str, map: &mut ConfigMap) -> ConfigResult<()> {
        (self.func)(value, key, map)
    }
}

/// Registered collection of target-key handlers.
#[derive(Default)]
pub struct HandlerRegistry {
    handlers: Vec<Box<dyn KeyHandler>>,
}

impl HandlerRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler. Registration order decides precedence.
    pub fn register(&mut self, handler: Box<dyn KeyHandler>) {
        self.handlers.push(handler);
    }

    /// True if any registered handler claims the key.
    pub fn is_target_key(&self, key: &str) -> bool {
        self.handlers.iter().any(|h| h.handles(key))
    }

    /// Dispatch a claimed key to the first handler that wants it.
    ///
    /// Unclaimed keys are a no-op; callers gate on [`is_target_key`]
    /// first.
    ///
    /// [`is_target_key`]: Self::is_target_key
    pub fn dispatch(&self, value: &Value, key: &str, map: &mut ConfigMap) -> ConfigResult<()> {
        for handler in &self.handlers {
            if handler.handles(key) {
                return handler.process(value, key, map).map_err(|e| {
                    tracing::error!(key = %key, error = %e, "Target key handler failed");
                    e
                });
            }
        }
        Ok(())
    }

    /// Number of registered handlers.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// True if no handlers are registered.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}
