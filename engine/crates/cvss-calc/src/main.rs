//! CVSS Calc - Command-line CVSS calculator
//!
//! Scores CVSS 2, 3.0, 3.1 and 4.0 vectors given as arguments, read line by
//! line from stdin, or extracted from a text file.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use cvss_common::{Config, LogConfig, LogFormat, OutputFormat, VersionSelector};
use cvss_core::{extract_vectors, parse, Vector};
use cvss_score::ScoreReport;
use tracing::{debug, info};

/// Padding of the score labels in text output
const PAD: usize = 23;

/// CVSS calculator
#[derive(Parser, Debug)]
#[command(name = "cvss-calc")]
#[command(version)]
#[command(about = "Compute CVSS 2, 3.x and 4.0 scores from vectors", long_about = None)]
struct Args {
    /// Vectors to score (read from stdin, one per line, when absent)
    vectors: Vec<String>,

    /// CVSS version of the vectors (auto, 2, 3.0, 3.1, 4.0)
    #[arg(long, value_name = "VERSION")]
    cvss: Option<VersionSelector>,

    /// Extract vectors from a text file
    #[arg(long, value_name = "FILE", conflicts_with = "vectors")]
    text: Option<PathBuf>,

    /// Print JSON documents instead of text
    #[arg(long)]
    json: bool,

    /// Stop at the first vector that fails
    #[arg(long)]
    fail_fast: bool,

    /// Configuration file path
    #[arg(short, long, env = "CVSS_CONFIG")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Log format (pretty, json, compact)
    #[arg(long)]
    log_format: Option<LogFormat>,
}

/// One vector to score, either raw text or already parsed
enum Input {
    Text(String),
    Parsed(Vector),
}

impl Input {
    fn label(&self) -> String {
        match self {
            Input::Text(text) => text.clone(),
            Input::Parsed(vector) => vector.to_string(),
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration
    let config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    }
    .merge_env();

    // Initialize logging
    let mut log_config = LogConfig::from(&config.logging);
    if let Some(level) = &args.log_level {
        log_config = log_config.level(level.clone());
    }
    if let Some(format) = args.log_format {
        log_config = log_config.format(format);
    }
    cvss_common::init_logging_with_config(log_config)?;

    let selector = args.cvss.unwrap_or(config.calculator.default_version);
    let output = if args.json {
        OutputFormat::Json
    } else {
        config.calculator.output
    };
    let fail_fast = args.fail_fast || config.calculator.fail_fast;
    debug!(?selector, ?output, fail_fast, "calculator settings");

    let inputs = collect_inputs(&args)?;
    info!(count = inputs.len(), "scoring vectors");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut failed = 0usize;
    for (index, input) in inputs.iter().enumerate() {
        match score(input, selector) {
            Ok(report) => {
                if output == OutputFormat::Text && index > 0 {
                    writeln!(out)?;
                }
                write_report(&mut out, &report, output)?;
            }
            Err(err) => {
                failed += 1;
                eprintln!("{}: {}", input.label(), err);
                if fail_fast {
                    break;
                }
            }
        }
    }
    out.flush()?;

    if failed > 0 {
        anyhow::bail!("{} of {} vectors failed", failed, inputs.len());
    }
    Ok(())
}

/// Gather the vectors from the file, the arguments or stdin
fn collect_inputs(args: &Args) -> Result<Vec<Input>> {
    if let Some(path) = &args.text {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        return Ok(extract_vectors(&content).into_iter().map(Input::Parsed).collect());
    }
    if !args.vectors.is_empty() {
        return Ok(args.vectors.iter().cloned().map(Input::Text).collect());
    }

    let mut inputs = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line.context("Failed to read stdin")?;
        let line = line.trim();
        if !line.is_empty() {
            inputs.push(Input::Text(line.to_string()));
        }
    }
    Ok(inputs)
}

fn score(input: &Input, selector: VersionSelector) -> cvss_core::Result<ScoreReport> {
    match input {
        Input::Parsed(vector) => Ok(ScoreReport::new(vector)),
        Input::Text(text) => {
            let version = selector.resolve(text)?;
            Ok(ScoreReport::new(&parse(text, version)?))
        }
    }
}

fn write_report(out: &mut impl Write, report: &ScoreReport, output: OutputFormat) -> Result<()> {
    match output {
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string(&report.to_json())?)?;
        }
        OutputFormat::Text => {
            let (scores, severities) = (&report.scores, &report.severities);
            writeln!(out, "{}", report.version.label())?;
            writeln!(out, "{:<PAD$}{:.1} ({})", "Base Score:", scores.base, severities.base)?;
            if let (Some(score), Some(severity)) = (scores.temporal, severities.temporal) {
                writeln!(out, "{:<PAD$}{:.1} ({})", "Temporal Score:", score, severity)?;
            }
            if let (Some(score), Some(severity)) = (scores.environmental, severities.environmental) {
                writeln!(out, "{:<PAD$}{:.1} ({})", "Environmental Score:", score, severity)?;
            }
            writeln!(out, "{:<PAD$}{}", "Cleaned vector:", report.clean_vector)?;
            writeln!(out, "{:<PAD$}{}", "Red Hat vector:", report.rh_vector())?;
        }
    }
    Ok(())
}
