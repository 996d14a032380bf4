//! Modbus Log Reader CLI Application
//!
//! This is the command-line interface for the Modbus monitor log decoder.
//! It uses the modbus-log-decoder library and adds:
//! - Reading a capture from a file or stdin
//! - TOML configuration with command-line overrides
//! - Parallel per-line decoding
//! - Text and JSON reports

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

mod config;
mod decode;
mod report;

use config::{AppConfig, OutputFormat};
use report::DecodedLine;

/// Modbus Log Reader - Decode serial monitor captures
#[derive(Parser, Debug)]
#[command(name = "modbus-log-cli")]
#[command(about = "Decode Modbus frames captured by a serial monitor", long_about = None)]
#[command(version)]
struct Args {
    /// Monitor log to decode (omit or use "-" for stdin)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Path to configuration file (config.toml)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output file for the report (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Report format
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Decode floats in natural (high word first) order instead of swapped
    #[arg(long)]
    natural_order: bool,

    /// Stop at the first line that fails to decode
    #[arg(long)]
    strict: bool,

    /// Verbosity level (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(args.verbose, args.quiet);

    log::info!("Modbus Log Reader CLI v{}", env!("CARGO_PKG_VERSION"));
    log::debug!("Using decoder library v{}", modbus_log_decoder::VERSION);

    let config = resolve_config(&args)?;
    log::debug!("Effective configuration: {:?}", config);

    let input = read_input(args.input.as_deref())?;
    let results = decode::decode_lines(&input, &config.decoder);
    let total = results.len();

    let mut decoded = Vec::with_capacity(total);
    for line_result in results {
        match line_result.result {
            Ok(message) => decoded.push(DecodedLine {
                line: line_result.line,
                message,
            }),
            Err(e) if config.input.strict => {
                bail!("line {}: {}", line_result.line, e);
            }
            Err(e) => log::warn!("Skipping line {}: {}", line_result.line, e),
        }
    }

    log::info!(
        "Decoded {} of {} lines ({} skipped)",
        decoded.len(),
        total,
        total - decoded.len()
    );

    let rendered = report::render(&decoded, config.output.format)?;
    write_output(config.output.path.as_deref(), &rendered)
}

/// Load the config file (if any) and apply command-line overrides
fn resolve_config(args: &Args) -> Result<AppConfig> {
    let mut config = match &args.config {
        Some(path) => {
            log::info!("Loading configuration from: {:?}", path);
            config::load_config(path)?
        }
        None => AppConfig::default(),
    };

    if args.natural_order {
        config.decoder = config.decoder.with_swapped_word_order(false);
    }
    if args.strict {
        config.input.strict = true;
    }
    if let Some(format) = args.format {
        config.output.format = format;
    }
    if let Some(path) = &args.output {
        config.output.path = Some(path.clone());
    }

    Ok(config)
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => {
            log::info!("Decoding log file: {:?}", path);
            fs::read_to_string(path).with_context(|| format!("Failed to read log file: {:?}", path))
        }
        _ => {
            log::info!("Decoding from stdin");
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read stdin")?;
            Ok(input)
        }
    }
}

fn write_output(path: Option<&Path>, rendered: &str) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, rendered)
                .with_context(|| format!("Failed to write report: {:?}", path))?;
            log::info!("Report written to {:?}", path);
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) {
    use env_logger::Builder;
    use log::LevelFilter;

    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}
