//! Lithium-Validation command-line validator.
//!
//! Scores a piece of text (given literally or read from a file) and prints a
//! report, the raw JSON result, or just `true`/`false`. Exits 0 when the text
//! is valid and 1 when it is not or when the input cannot be read.
//!
//! Usage:
//!   lithium-validate "The capital of France is Paris"
//!   lithium-validate --file output.txt
//!   lithium-validate --type factual "According to studies..."
//!   lithium-validate --json "Some AI output"

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use clap::{ArgGroup, Parser, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use lithium_contracts::{
    config::ValidatorConfig,
    error::{LithiumError, LithiumResult},
    result::{ValidationMode, ValidationResult},
};
use lithium_interface::{render, ValidationInterface};
use lithium_rules::RuleCatalog;

// ── CLI definition ────────────────────────────────────────────────────────────

/// Lithium-Validation: heuristic trust scoring for AI-generated text.
#[derive(Parser)]
#[command(
    name = "lithium-validate",
    about = "Lithium-Validation: AI output validation",
    long_about = "Scores text for unsupported claims, internal contradiction and\n\
                  missing attribution, then reports a confidence tier and verdict."
)]
#[command(group(ArgGroup::new("input").required(true).args(["text", "file"])))]
struct Cli {
    /// Text to validate.
    text: Option<String>,

    /// File containing text to validate.
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Type of validation to perform.
    #[arg(short = 't', long = "type", value_enum, default_value_t = ModeArg::Comprehensive)]
    mode: ModeArg,

    /// Additional context for validation.
    #[arg(short, long)]
    context: Option<String>,

    /// Output results in JSON format.
    #[arg(short, long)]
    json: bool,

    /// Only output the validation result (true/false).
    #[arg(short, long)]
    quiet: bool,

    /// Confidence threshold for validation (0.0-1.0).
    #[arg(long, default_value_t = 0.7)]
    threshold: f64,

    /// TOML rule file replacing the built-in pattern tables.
    #[arg(long)]
    rules: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Quick,
    Comprehensive,
    Factual,
    Logical,
    Sources,
}

impl From<ModeArg> for ValidationMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Quick => ValidationMode::Quick,
            ModeArg::Comprehensive => ValidationMode::Comprehensive,
            ModeArg::Factual => ValidationMode::Factual,
            ModeArg::Logical => ValidationMode::Logical,
            ModeArg::Sources => ValidationMode::Sources,
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> ExitCode {
    // Logs go to stderr so --json and --quiet output stay machine-readable.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(result) if result.is_valid => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> LithiumResult<ValidationResult> {
    let text = read_input(cli)?;

    let config = ValidatorConfig {
        confidence_threshold: cli.threshold,
        ..ValidatorConfig::default()
    };
    let catalog = match &cli.rules {
        Some(path) => RuleCatalog::from_file(path)?,
        None => RuleCatalog::builtin()?,
    };
    let interface = ValidationInterface::with_catalog(config, Arc::new(catalog))?;

    let mode = ValidationMode::from(cli.mode);
    debug!(%mode, chars = text.chars().count(), "validating input");
    let result = interface.validate_output(&text, cli.context.as_deref(), mode);

    if cli.quiet {
        println!("{}", result.is_valid);
    } else if cli.json {
        let json = serde_json::to_string_pretty(&result.to_value()).map_err(|e| LithiumError::Io {
            reason: format!("failed to encode result: {e}"),
        })?;
        println!("{json}");
    } else {
        print_report(&result);
    }

    Ok(result)
}

// ── Input ─────────────────────────────────────────────────────────────────────

fn read_input(cli: &Cli) -> LithiumResult<String> {
    let text = match (&cli.file, &cli.text) {
        (Some(path), _) => read_file(path)?,
        (None, Some(text)) => text.clone(),
        (None, None) => String::new(),
    };

    if text.is_empty() {
        return Err(LithiumError::MissingInput {
            reason: "no text provided for validation".to_string(),
        });
    }
    Ok(text)
}

fn read_file(path: &Path) -> LithiumResult<String> {
    match std::fs::read_to_string(path) {
        Ok(contents) => Ok(contents.trim().to_string()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(LithiumError::Io {
            reason: format!("file '{}' not found", path.display()),
        }),
        Err(e) => Err(LithiumError::Io {
            reason: format!("error reading file '{}': {e}", path.display()),
        }),
    }
}

// ── Report ────────────────────────────────────────────────────────────────────

fn print_report(result: &ValidationResult) {
    print!("{}", render::report(result));
    println!();
    println!("Recommendations:");
    for line in render::recommendations(result.confidence) {
        println!("  - {line}");
    }
}
