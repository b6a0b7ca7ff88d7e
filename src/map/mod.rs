//! String maps produced by the configuration walk.
//!
//! # Responsibilities
//! - Hold flattened key/value pairs (`ConfigMap`)
//! - Hold section-grouped pairs (`SectionedMap`)
//! - Expose lookups that fail with a typed error instead of a sentinel
//!
//! # Design Decisions
//! - Duplicate keys follow last-write-wins; a later entry replaces an
//!   earlier one for the same key
//! - Maps are plain owned values; sharing across components is the
//!   caller's concern (wrap in `Arc` if needed)
//! - Serde derives allow dumping a loaded map back out as JSON

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Flat mapping of configuration keys to string values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigMap {
    entries: BTreeMap<String, String>,
}

impl ConfigMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry. A previous value under the same key is replaced.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Look up a key, failing with [`ConfigError::MissingKey`] if absent.
    pub fn get(&self, key: &str) -> ConfigResult<&str> {
        self.entries
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| ConfigError::MissingKey {
                key: key.to_string(),
            })
    }

    /// Look up a key, returning `None` if absent.
    pub fn get_opt(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the map holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Two-level mapping: section name to a [`ConfigMap`] of its settings.
///
/// The section name is the object member the settings were found under,
/// e.g. `[{"server": {"port": 8080}}]` stores `port` in section `server`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionedMap {
    sections: BTreeMap<String, ConfigMap>,
}

impl SectionedMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry under a section, creating the section if needed.
    /// A previous value under the same section and key is replaced.
    pub fn insert(
        &mut self,
        section: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.sections
            .entry(section.into())
            .or_default()
            .insert(key, value);
    }

    /// Borrow a section's map mutably, creating it if needed.
    pub fn section_mut(&mut self, section: impl Into<String>) -> &mut ConfigMap {
        self.sections.entry(section.into()).or_default()
    }

    /// Look up a section, failing with [`ConfigError::MissingKey`] if absent.
    pub fn section(&self, section: &str) -> ConfigResult<&ConfigMap> {
        self.sections
            .get(section)
            .ok_or_else(|| ConfigError::MissingKey {
                key: section.to_string(),
            })
    }

    /// Look up a key within a section.
    pub fn get(&self, section: &str, key: &str) -> ConfigResult<&str> {
        self.section(section)?.get(key)
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// True if the map holds no sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Iterate over sections in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ConfigMap)> {
        self.sections.iter().map(|(name, map)| (name.as_str(), map))
    }
}
