pub mod document;

use crate::casing::Case;
use serde_json::{Map, Value};

pub use document::{transform_json, transform_serializable};

/// Rewrite every mapping key in `value` under `case`, recursing through
/// nested mappings and sequences. Strings, numbers, booleans and null are
/// returned untouched, even when they look like identifiers.
///
/// When two keys of the same mapping transform to the same key, the later
/// entry's value wins and keeps the position of the first one. Each such
/// collision is reported with a `warn!` event.
pub fn deep_map_keys(value: Value, case: Case) -> Value {
    match value {
        Value::Object(map) => Value::Object(map_keys(map, case)),
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|item| deep_map_keys(item, case))
                .collect(),
        ),
        primitive => primitive,
    }
}

fn map_keys(map: Map<String, Value>, case: Case) -> Map<String, Value> {
    let mut out = Map::with_capacity(map.len());

    for (key, value) in map {
        let new_key = case.apply(&key);
        let value = match value {
            Value::Object(_) | Value::Array(_) => deep_map_keys(value, case),
            primitive => primitive,
        };

        if out.insert(new_key.clone(), value).is_some() {
            tracing::warn!(
                original = %key,
                key = %new_key,
                %case,
                "key collision, later entry overwrites the earlier one"
            );
        }
    }

    out
}

pub fn deep_camel_keys(value: Value) -> Value {
    deep_map_keys(value, Case::Camel)
}

pub fn deep_pascal_keys(value: Value) -> Value {
    deep_map_keys(value, Case::Pascal)
}

pub fn deep_snake_keys(value: Value) -> Value {
    deep_map_keys(value, Case::Snake)
}

pub fn deep_kebab_keys(value: Value) -> Value {
    deep_map_keys(value, Case::Kebab)
}

pub fn deep_constant_keys(value: Value) -> Value {
    deep_map_keys(value, Case::Constant)
}
