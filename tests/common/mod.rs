//! Shared utilities for integration tests.

use std::io::Write;

use tempfile::NamedTempFile;

/// Write `contents` to a fresh temp file and return its handle.
///
/// The file lives as long as the returned handle; keep it in scope for
/// the duration of the test.
pub fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp config file");
    file.write_all(contents.as_bytes())
        .expect("write temp config file");
    file.flush().expect("flush temp config file");
    file
}
