use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};

use reqscope_logs::{LineClassifier, aggregate_files};
use reqscope_report::render_handlers;
use reqscope_types::Config;

/// Reqscope - per-handler severity reports from Django request logs
#[derive(Parser, Debug)]
#[command(name = "reqscope")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Log files to analyze
    #[arg(value_name = "LOG_FILE", required = true)]
    log_files: Vec<PathBuf>,

    /// Report to produce
    #[arg(long, value_enum, default_value_t = ReportKind::Handlers)]
    report: ReportKind,

    /// TOML config file overriding the built-in defaults
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

/// Available report types
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ReportKind {
    /// Severity counts per request handler
    Handlers,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize tracing for debugging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    // Run the application
    let result = run(args);

    // Handle any errors
    if let Err(e) = &result {
        eprintln!("Error: {:#}", e);
    }

    result
}

fn run(args: Args) -> Result<()> {
    let config = load_config(args.config.as_deref())?;

    // Preflight: refuse to start on any missing input
    let missing = missing_files(&args.log_files);
    if !missing.is_empty() {
        bail!("log files not found: {}", join_paths(&missing));
    }

    let classifier = LineClassifier::new(&config.request_logger);
    let stats = aggregate_files(&classifier, &args.log_files)?;

    let report = match args.report {
        ReportKind::Handlers => render_handlers(&stats),
    };

    println!("{report}");
    fs::write(&config.report_file, &report)
        .with_context(|| format!("failed to write report to {}", config.report_file))?;

    Ok(())
}

/// Load configuration, from a TOML file when one is given
fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("failed to read config file {}", path.display()))?;
            toml::from_str(&raw).with_context(|| format!("invalid config file {}", path.display()))
        }
        None => Ok(Config::default()),
    }
}

/// Return the subset of paths that do not exist on disk
fn missing_files(paths: &[PathBuf]) -> Vec<PathBuf> {
    paths.iter().filter(|p| !p.exists()).cloned().collect()
}

fn join_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
