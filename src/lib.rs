//! JSON configuration mapping library.
//!
//! Reads a JSON document shaped as an array of objects and flattens it
//! into string-to-string maps, with an extension hook for keys that need
//! custom handling.
//!
//! # Data Flow
//! ```text
//! config file (JSON)
//!     → loader (read, parse, validate root shape)
//!     → walker (recursive classification and storage)
//!     → ConfigMap (flat) or SectionedMap (section → key → value)
//!
//! Registered target keys bypass the generic walk:
//!     walker encounters a claimed key
//!     → handler registry dispatch
//!     → handler writes its own entries into the map
//! ```
//!
//! # Example
//! ```no_run
//! use confmap::ConfigLoader;
//!
//! let map = ConfigLoader::new("config.json").load()?;
//! let port = map.get("port")?;
//! # Ok::<(), confmap::ConfigError>(())
//! ```

pub mod error;
pub mod handler;
pub mod loader;
pub mod map;
pub mod walker;

pub use error::{ConfigError, ConfigResult};
pub use handler::{FnHandler, HandlerRegistry, KeyHandler};
pub use loader::{validate_root, ConfigLoader};
pub use map::{ConfigMap, SectionedMap};
pub use walker::{classify, ValueKind, Walker};
