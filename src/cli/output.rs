use crate::casing::{Case, Token};
use crate::KeysReport;
use anyhow::Result;
use colored::*;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Serialize)]
struct JsonConversion<'a> {
    input: &'a str,
    output: &'a str,
}

#[derive(Debug, Serialize)]
struct JsonConversions<'a> {
    case: Case,
    conversions: Vec<JsonConversion<'a>>,
}

#[derive(Debug, Serialize)]
struct JsonTokens<'a> {
    input: &'a str,
    tokens: &'a [Token<'a>],
}

/// Print `(input, output)` pairs produced by a single casing policy.
pub fn print_conversions(
    pairs: &[(String, String)],
    case: Case,
    colored_output: bool,
    format: &OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for (input, output) in pairs {
                // A single input prints bare so the output can be piped
                if pairs.len() == 1 {
                    println!("{}", output);
                } else if colored_output {
                    println!("{} {} {}", input.dimmed(), "→".dimmed(), output.green().bold());
                } else {
                    println!("{} → {}", input, output);
                }
            }
        }
        OutputFormat::Json => {
            let output = JsonConversions {
                case,
                conversions: pairs
                    .iter()
                    .map(|(input, output)| JsonConversion { input, output })
                    .collect(),
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}

pub fn print_tokens(
    input: &str,
    tokens: &[Token<'_>],
    colored_output: bool,
    format: &OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            if colored_output {
                println!("\n{}", format!("{:?}", input).bold().underline());
            } else {
                println!("\n{:?}", input);
            }

            if tokens.is_empty() {
                println!("  (no tokens)");
            }

            for (i, token) in tokens.iter().enumerate() {
                let (kind, text) = match token {
                    Token::Word(text) => ("word", *text),
                    Token::Symbol(text) => ("symbol", *text),
                };
                if colored_output {
                    let text = if token.is_word() {
                        text.green().bold()
                    } else {
                        text.yellow().bold()
                    };
                    println!("  {} {:<6} {}", format!("{:>2}", i).blue(), kind.dimmed(), text);
                } else {
                    println!("  {:>2} {:<6} {}", i, kind, text);
                }
            }
        }
        OutputFormat::Json => {
            let output = JsonTokens { input, tokens };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}

pub fn print_failures(report: &KeysReport, colored: bool) {
    for failure in &report.failures {
        if colored {
            eprintln!(
                "{} {}: {}",
                "error:".red().bold(),
                failure.source.bold(),
                failure.message
            );
        } else {
            eprintln!("error: {}: {}", failure.source, failure.message);
        }
    }
}

/// Summary for rewrites done in place; documents written to stdout carry no summary.
pub fn print_keys_summary(report: &KeysReport, case: Case, colored: bool) {
    let doc_word = |n: usize| if n == 1 { "document" } else { "documents" };

    println!();
    if report.failures.is_empty() {
        if colored {
            println!(
                "{} {} {} rewritten to {} keys",
                "✓".green().bold(),
                report.written.to_string().green().bold(),
                doc_word(report.written),
                case.to_string().cyan()
            );
        } else {
            println!(
                "✓ {} {} rewritten to {} keys",
                report.written,
                doc_word(report.written),
                case
            );
        }
    } else {
        let failed = report.failures.len();
        if colored {
            println!(
                "{} {} of {} {} failed",
                "✗".red().bold(),
                failed.to_string().red().bold(),
                report.documents,
                doc_word(report.documents)
            );
        } else {
            println!(
                "✗ {} of {} {} failed",
                failed,
                report.documents,
                doc_word(report.documents)
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_json_tokens_shape() {
        let tokens = [Token::Word("cased"), Token::Symbol("$*")];
        let output = JsonTokens {
            input: "cased$*",
            tokens: &tokens,
        };
        let value = serde_json::to_value(&output).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "input": "cased$*",
                "tokens": [
                    { "kind": "word", "text": "cased" },
                    { "kind": "symbol", "text": "$*" }
                ]
            })
        );
    }
}
