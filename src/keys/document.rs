use crate::casing::Case;
use crate::Error;
use serde::Serialize;
use serde_json::Value;

use super::deep_map_keys;

/// Serialize `value` and rewrite the keys of the resulting tree.
///
/// Fails when the type cannot be represented as JSON, e.g. a map keyed by
/// something other than strings.
pub fn transform_serializable<T: Serialize + ?Sized>(value: &T, case: Case) -> Result<Value, Error> {
    let value = serde_json::to_value(value)?;
    Ok(deep_map_keys(value, case))
}

/// Parse a JSON document, rewrite its keys and render it back.
pub fn transform_json(input: &str, case: Case, pretty: bool) -> Result<String, Error> {
    let value: Value = serde_json::from_str(input)?;
    let value = deep_map_keys(value, case);

    let rendered = if pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };

    tracing::debug!(%case, bytes_in = input.len(), bytes_out = rendered.len(), "transformed document");
    Ok(rendered)
}
