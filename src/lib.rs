pub mod casing;
pub mod cli;
pub mod config;
pub mod keys;

pub use casing::{
    camel_case, constant_case, kebab_case, pascal_case, snake_case, tokenize, Case, Token,
};
pub use config::Config;
pub use keys::{
    deep_camel_keys, deep_constant_keys, deep_kebab_keys, deep_map_keys, deep_pascal_keys,
    deep_snake_keys, transform_json, transform_serializable,
};

/// Nested key/value data walked by the deep key mapper.
pub use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Summary of a batch of key rewrites, one per processed document.
#[derive(Debug, Clone, Default)]
pub struct KeysReport {
    pub documents: usize,
    pub written: usize,
    pub failures: Vec<DocumentFailure>,
}

#[derive(Debug, Clone)]
pub struct DocumentFailure {
    pub source: String,
    pub message: String,
}
