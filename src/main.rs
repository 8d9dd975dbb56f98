//! Command-line entry point for lockscan.

use anyhow::bail;
use clap::{Parser, ValueEnum};
use lockscan::{
    DetectionPipeline, DetectionResult, ExecutionMode, ScanScheduler, DEFAULT_SAMPLE_SIZE,
};
use std::path::PathBuf;
use std::time::Instant;

/// Scan files for password protection and encryption.
#[derive(Parser, Debug)]
#[command(name = "lockscan")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// File to analyze, or directory to scan with --batch
    path: PathBuf,

    /// Recursively scan a directory
    #[arg(long)]
    batch: bool,

    /// Execution mode for batch scans
    #[arg(long, value_enum, default_value_t = Mode::Sequential)]
    mode: Mode,

    /// Output format (text, json)
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Leading bytes sampled for entropy analysis
    #[arg(long, default_value_t = DEFAULT_SAMPLE_SIZE)]
    sample_size: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    Sequential,
    Concurrent,
}

impl From<Mode> for ExecutionMode {
    fn from(mode: Mode) -> ExecutionMode {
        match mode {
            Mode::Sequential => ExecutionMode::Sequential,
            Mode::Concurrent => ExecutionMode::Concurrent,
        }
    }
}

/// Output format for results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Human-readable text output
    Text,
    /// JSON output for machine processing
    Json,
}

fn main() -> anyhow::Result<()> {
    lockscan::logging::init_tracing();
    let cli = Cli::parse();
    let total = Instant::now();

    let pipeline = DetectionPipeline::new().with_sample_size(cli.sample_size);

    let results: Vec<DetectionResult> = if cli.batch && cli.path.is_dir() {
        if cli.format == OutputFormat::Text {
            println!("Scanning directory: {}\n", cli.path.display());
        }
        ScanScheduler::new(pipeline, cli.mode.into()).scan(&cli.path)?
    } else if cli.path.is_file() {
        vec![pipeline.analyze_file(&cli.path)]
    } else {
        bail!(
            "invalid path {}: provide a file, or a directory with --batch",
            cli.path.display()
        );
    };

    match cli.format {
        OutputFormat::Text => {
            for result in &results {
                println!("{}", format_result(result));
            }
            println!(
                "\nTotal execution time: {:.4}s",
                total.elapsed().as_secs_f64()
            );
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&results)?);
        }
    }

    Ok(())
}

fn format_result(result: &DetectionResult) -> String {
    let status = if result.password_protected {
        "PASSWORD PROTECTED"
    } else {
        "NOT PASSWORD PROTECTED"
    };
    format!(
        "{}: {} (Encrypted: {}, Confidence: {:.2}, Time: {:.4}s)",
        result.file.display(),
        status,
        result.encrypted,
        result.confidence,
        result.duration.as_secs_f64()
    )
}
