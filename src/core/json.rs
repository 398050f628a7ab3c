//! JSON parsing helpers

use crate::error::Result;
use serde_json::{Map, Value};
use tracing::debug;

/// Parse JSON, surfacing the parse error
pub fn json_parse(input: &str) -> Result<Value> {
    Ok(serde_json::from_str(input)?)
}

/// Parse JSON, substituting an empty object for any malformed input.
///
/// Callers cannot tell invalid input apart from a literal `{}`; use
/// [`json_parse`] when that matters.
pub fn json_safe_parse(input: &str) -> Value {
    json_parse(input).unwrap_or_else(|err| {
        debug!("Discarding unparseable JSON input: {}", err);
        Value::Object(Map::new())
    })
}
