pub mod assembler;
pub mod tokenizer;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use assembler::assemble;
pub use tokenizer::{tokenize, Token};

/// A casing policy used to rejoin tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Case {
    /// `someWeirdCased`
    #[default]
    Camel,
    /// `SomeWeirdCased`
    Pascal,
    /// `some_weird_cased`
    Snake,
    /// `some-weird-cased`
    Kebab,
    /// `SOME_WEIRD_CASED`
    Constant,
}

impl Case {
    pub const ALL: [Case; 5] = [
        Case::Camel,
        Case::Pascal,
        Case::Snake,
        Case::Kebab,
        Case::Constant,
    ];

    /// Tokenize `input` and reassemble it under this policy
    pub fn apply(self, input: &str) -> String {
        assemble(&tokenize(input), self)
    }
}

impl FromStr for Case {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "camel" => Ok(Case::Camel),
            "pascal" => Ok(Case::Pascal),
            "snake" => Ok(Case::Snake),
            "kebab" => Ok(Case::Kebab),
            "constant" => Ok(Case::Constant),
            _ => Err(format!("Unknown case: {}", s)),
        }
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Case::Camel => write!(f, "camel"),
            Case::Pascal => write!(f, "pascal"),
            Case::Snake => write!(f, "snake"),
            Case::Kebab => write!(f, "kebab"),
            Case::Constant => write!(f, "constant"),
        }
    }
}

pub fn camel_case(input: &str) -> String {
    Case::Camel.apply(input)
}

pub fn pascal_case(input: &str) -> String {
    Case::Pascal.apply(input)
}

pub fn snake_case(input: &str) -> String {
    Case::Snake.apply(input)
}

pub fn kebab_case(input: &str) -> String {
    Case::Kebab.apply(input)
}

pub fn constant_case(input: &str) -> String {
    Case::Constant.apply(input)
}
