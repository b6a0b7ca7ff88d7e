//! Recursive-descent traversal of a validated configuration tree.
//!
//! # Data Flow
//! ```text
//! validated root (array of objects)
//!     → per element: must be an object
//!     → per member (key, value):
//!         registered target key → handler dispatch (no recursion)
//!         array                 → recurse (elements must be objects)
//!         object                → recurse
//!         scalar                → store as string (string/int only)
//! ```
//!
//! # Design Decisions
//! - Plain recursion; config files are small, trusted and loaded once,
//!   so no streaming or iterative traversal
//! - The target-key check runs before the generic type dispatch, so a
//!   claimed key is never walked generically
//! - The sectioned variant runs the identical traversal but writes every
//!   scalar under the root-level member name it was found beneath

pub mod classify;

pub use classify::{classify, ValueKind};

use serde_json::{Map, Value};

use crate::error::{ConfigError, ConfigResult};
use crate::handler::HandlerRegistry;
use crate::map::{ConfigMap, SectionedMap};

/// Recursive-descent walker over a validated configuration tree.
pub struct Walker<'a> {
    registry: &'a HandlerRegistry,
}

impl<'a> Walker<'a> {
    /// Create a walker dispatching target keys to `registry`.
    pub fn new(registry: &'a HandlerRegistry) -> Self {
        Self { registry }
    }

    /// Walk the root array into a flat map.
    pub fn walk_root(&self, root: &[Value], map: &mut ConfigMap) -> ConfigResult<()> {
        for element in root {
            self.walk_object(as_object(element)?, map)?;
        }
        Ok(())
    }

    /// Walk an array value: every element must be an object.
    fn walk_array(&self, elements: &[Value], map: &mut ConfigMap) -> ConfigResult<()> {
        for element in elements {
            self.walk_object(as_object(element)?, map)?;
        }
        Ok(())
    }

    fn walk_object(&self, members: &Map<String, Value>, map: &mut ConfigMap) -> ConfigResult<()> {
        for (key, value) in members {
            if self.registry.is_target_key(key) {
                tracing::debug!(key = %key, "Dispatching target key");
                self.registry.dispatch(value, key, map)?;
                continue;
            }
            match value {
                Value::Array(elements) => self.walk_array(elements, map)?,
                Value::Object(nested) => self.walk_object(nested, map)?,
                scalar => store_scalar(key, scalar, map)?,
            }
        }
        Ok(())
    }

    /// Walk the root array into a sectioned map.
    ///
    /// Each root-level member names a section; its value must be an
    /// object of settings or an array of such objects.
    pub fn walk_root_sections(&self, root: &[Value], map: &mut SectionedMap) -> ConfigResult<()> {
        for element in root {
            for (member, value) in as_object(element)? {
                if self.registry.is_target_key(member) {
                    tracing::debug!(key = %member, "Dispatching target key");
                    self.registry.dispatch(value, member, map.section_mut(member))?;
                    continue;
                }
                match value {
                    Value::Array(elements) => self.walk_array_section(member, elements, map)?,
                    Value::Object(nested) => self.walk_object_section(member, nested, map)?,
                    _ => {
                        tracing::error!(
                            key = %member,
                            "Section member must be an object or an array of objects"
                        );
                        return Err(ConfigError::InvalidFormat);
                    }
                }
            }
        }
        Ok(())
    }

    fn walk_array_section(
        &self,
        section: &str,
        elements: &[Value],
        map: &mut SectionedMap,
    ) -> ConfigResult<()> {
        for element in elements {
            self.walk_object_section(section, as_object(element)?, map)?;
        }
        Ok(())
    }

    fn walk_object_section(
        &self,
        section: &str,
        members: &Map<String, Value>,
        map: &mut SectionedMap,
    ) -> ConfigResult<()> {
        for (key, value) in members {
            if self.registry.is_target_key(key) {
                tracing::debug!(key = %key, section = %section, "Dispatching target key");
                self.registry.dispatch(value, key, map.section_mut(section))?;
                continue;
            }
            match value {
                Value::Array(elements) => self.walk_array_section(section, elements, map)?,
                Value::Object(nested) => self.walk_object_section(section, nested, map)?,
                scalar => {
                    let section_map = map.section_mut(section);
                    store_scalar(key, scalar, section_map)?;
                }
            }
        }
        Ok(())
    }
}

/// Store one scalar leaf, stringifying integers in canonical decimal form.
pub fn store_scalar(key: &str, value: &Value, map: &mut ConfigMap) -> ConfigResult<()> {
    let rendered = match classify(value) {
        ValueKind::Str => value.as_str().map(str::to_owned),
        ValueKind::Int => value
            .as_i64()
            .map(|n| n.to_string())
            .or_else(|| value.as_u64().map(|n| n.to_string())),
        _ => None,
    };

    match rendered {
        Some(text) => {
            map.insert(key, text);
            Ok(())
        }
        None => {
            tracing::error!(key = %key, "Leaf value is neither a string nor an integer");
            Err(ConfigError::InvalidValueType {
                key: key.to_string(),
            })
        }
    }
}

fn as_object(value: &Value) -> ConfigResult<&Map<String, Value>> {
    match value {
        Value::Object(members) => Ok(members),
        _ => {
            tracing::error!("Array element is not a JSON object");
            Err(ConfigError::InvalidFormat)
        }
    }
}
