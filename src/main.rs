use anyhow::{Context, Result};
use clap::{ArgAction, CommandFactory, Parser};
use clap_complete::{generate, Shell};
use keycase::cli::output::{self, OutputFormat};
use keycase::config::Overrides;
use keycase::{keys, tokenize, Case, Config, DocumentFailure, KeysReport};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "keycase")]
#[command(version, about = "Convert string casing and rewrite JSON keys", long_about = None)]
struct Cli {
    /// Output format (text, json)
    #[arg(short = 'o', long, global = true, default_value = "text")]
    format: OutputFormat,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Parser, Debug)]
enum Commands {
    /// Convert each text to the target case
    Convert {
        /// Target case (camel, pascal, snake, kebab, constant)
        #[arg(short, long)]
        case: Option<Case>,

        /// Texts to convert
        #[arg(value_name = "TEXT", required = true)]
        texts: Vec<String>,
    },
    /// Show how each text is split into tokens
    Tokens {
        #[arg(value_name = "TEXT", required = true)]
        texts: Vec<String>,
    },
    /// Rewrite every key of JSON documents, leaving values untouched
    Keys {
        /// Target case (camel, pascal, snake, kebab, constant)
        #[arg(short, long)]
        case: Option<Case>,

        /// Emit compact JSON instead of pretty-printing
        #[arg(long)]
        compact: bool,

        /// Write results back to the input files
        #[arg(short, long, requires = "files")]
        in_place: bool,

        /// JSON files to rewrite; reads stdin when omitted
        #[arg(value_name = "FILES")]
        files: Vec<PathBuf>,
    },
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    // Logs go to stderr so stdout stays pipeable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "keycase", &mut io::stdout());
        return Ok(());
    }

    init_logging(cli.verbose);

    let Some(command) = cli.command else {
        anyhow::bail!("No command specified. Use --help for usage information.");
    };

    match command {
        Commands::Convert { case, texts } => {
            let config = load_config(case, false, cli.no_color)?;
            let pairs: Vec<(String, String)> = texts
                .into_iter()
                .map(|text| {
                    let converted = config.case.apply(&text);
                    (text, converted)
                })
                .collect();
            output::print_conversions(&pairs, config.case, config.color, &cli.format)?;
        }
        Commands::Tokens { texts } => {
            let config = load_config(None, false, cli.no_color)?;
            for text in &texts {
                output::print_tokens(text, &tokenize(text), config.color, &cli.format)?;
            }
        }
        Commands::Keys {
            case,
            compact,
            in_place,
            files,
        } => {
            let config = load_config(case, compact, cli.no_color)?;
            let report = rewrite_keys(&files, &config, in_place, |path, contents| {
                fs::write(path, contents)
            })?;

            output::print_failures(&report, config.color);
            if in_place {
                output::print_keys_summary(&report, config.case, config.color);
            }

            if !report.failures.is_empty() {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

fn load_config(case: Option<Case>, compact: bool, no_color: bool) -> Result<Config> {
    let config = Config::load(&Overrides {
        case,
        compact,
        no_color,
    })?;
    debug!(?config, "loaded configuration");
    Ok(config)
}

/// Rewrite each document, recording per-file failures instead of aborting the batch.
/// `write` persists in-place results.
fn rewrite_keys<W>(
    files: &[PathBuf],
    config: &Config,
    in_place: bool,
    mut write: W,
) -> Result<KeysReport>
where
    W: FnMut(&Path, &str) -> io::Result<()>,
{
    let mut report = KeysReport::default();

    if files.is_empty() {
        let mut input = String::new();
        io::stdin()
            .read_to_string(&mut input)
            .context("Failed to read stdin")?;

        report.documents = 1;
        match keys::transform_json(&input, config.case, config.pretty) {
            Ok(rendered) => {
                println!("{}", rendered);
                report.written += 1;
            }
            Err(e) => report.failures.push(DocumentFailure {
                source: "<stdin>".to_string(),
                message: e.to_string(),
            }),
        }
        return Ok(report);
    }

    for file_path in files {
        report.documents += 1;
        let source = file_path.display().to_string();

        let content = match fs::read_to_string(file_path) {
            Ok(content) => content,
            Err(e) => {
                report.failures.push(DocumentFailure {
                    source,
                    message: format!("Failed to read file: {}", e),
                });
                continue;
            }
        };

        let rendered = match keys::transform_json(&content, config.case, config.pretty) {
            Ok(rendered) => rendered,
            Err(e) => {
                report.failures.push(DocumentFailure {
                    source,
                    message: e.to_string(),
                });
                continue;
            }
        };

        if in_place {
            if let Err(e) = write(file_path, &format!("{}\n", rendered)) {
                report.failures.push(DocumentFailure {
                    source,
                    message: format!("Failed to write file: {}", e),
                });
                continue;
            }
            info!(file = %source, case = %config.case, "rewrote keys in place");
        } else {
            println!("{}", rendered);
        }
        report.written += 1;
    }

    Ok(report)
}
