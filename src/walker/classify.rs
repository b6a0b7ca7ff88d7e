//! JSON node classification.

use serde_json::Value;

/// Shape classes the walker dispatches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// A JSON string.
    Str,
    /// A JSON integer (fits in `i64` or `u64`).
    Int,
    /// A JSON array.
    Array,
    /// A JSON object.
    Object,
    /// Anything else: floats, booleans, null.
    Unsupported,
}

/// Classify a JSON node.
///
/// Floats, booleans and null are `Unsupported`: the leaf contract is
/// string-or-integer only, and anything else is rejected at store time.
pub fn classify(value: &Value) -> ValueKind {
    match value {
        Value::String(_) => ValueKind::Str,
        Value::Number(n) if n.is_i64() || n.is_u64() => ValueKind::Int,
        Value::Number(_) => ValueKind::Unsupported,
        Value::Array(_) => ValueKind::Array,
        Value::Object(_) => ValueKind::Object,
        Value::Bool(_) | Value::Null => ValueKind::Unsupported,
    }
}
