//! plated-slot-converter: rewrites plated oval slots in KiCad boards
//!
//! Reads a board (or footprint) from a file or standard input and writes it
//! back with every `thru_hole oval` slot replaced by SMD pads and a routed
//! outline on the cutout layer.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use thiserror::Error;
use tracing::{debug, info, Level};
use tracing_subscriber::EnvFilter;

use plated_slot_converter::config;
use plated_slot_converter::kicad::{self, RotationMode, SlotError, SlotOptions};

/// Rewrites plated oval slots as SMD pads plus routed edge cuts.
#[derive(Parser, Debug)]
#[command(name = "plated-slot-converter")]
#[command(author, version, about, long_about = None)]
#[command(
    override_usage = "plated-slot-converter [OPTIONS] [INPUT] < board.kicad_pcb > board-fab.kicad_pcb",
    help_template = "{usage-heading} {usage}"
)]
struct Args {
    /// Board or footprint file to read ("-" or omitted for stdin)
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Write the result here instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Path to configuration file
    #[arg(short, long, value_name = "CONFIG_FILE")]
    config: Option<PathBuf>,

    /// How pad rotation affects the slot outline
    #[arg(long, value_enum, value_name = "MODE")]
    rotation_mode: Option<RotationArg>,

    /// List the plated slots found instead of rewriting the board
    #[arg(long)]
    list: bool,

    /// Increase logging verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Decrease logging verbosity (only show errors)
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum RotationArg {
    #[value(name = "axis_aligned")]
    AxisAligned,
    #[value(name = "follow_pad")]
    FollowPad,
}

impl From<RotationArg> for RotationMode {
    fn from(arg: RotationArg) -> Self {
        match arg {
            RotationArg::AxisAligned => Self::AxisAligned,
            RotationArg::FollowPad => Self::FollowPad,
        }
    }
}

/// Failures of a single run.
#[derive(Debug, Error)]
enum RunError {
    #[error("failed to read {path}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {path}")]
    Write {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Slot(#[from] SlotError),
}

/// Determines the log level from CLI arguments.
#[allow(clippy::match_same_arms)] // Explicit "warn" arm for clarity
fn get_log_level(verbose: u8, quiet: bool, config_level: &str) -> Level {
    if quiet {
        return Level::ERROR;
    }

    match verbose {
        0 => match config_level.to_lowercase().as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::WARN, // Default to warn for unknown levels
        },
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Initialises the tracing subscriber for logging.
fn init_tracing(level: Level) {
    let filter = EnvFilter::from_default_env().add_directive(level.into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn read_input(input: Option<&Path>) -> Result<String, RunError> {
    match input {
        Some(path) if path != Path::new("-") => {
            fs::read_to_string(path).map_err(|source| RunError::Read {
                path: path.display().to_string(),
                source,
            })
        }
        _ => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .map_err(|source| RunError::Read {
                    path: "<stdin>".to_string(),
                    source,
                })?;
            Ok(text)
        }
    }
}

fn write_output(output: Option<&Path>, text: &str) -> Result<(), RunError> {
    match output {
        Some(path) => fs::write(path, text).map_err(|source| RunError::Write {
            path: path.display().to_string(),
            source,
        }),
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(text.as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(|source| RunError::Write {
                    path: "<stdout>".to_string(),
                    source,
                })
        }
    }
}

/// Formats the `--list` report, one line per slot.
fn list_report(text: &str, options: &SlotOptions) -> Result<String, SlotError> {
    let mut report = String::new();
    for (record, geometry) in kicad::survey(text, options)? {
        report.push_str(&format!(
            "pad {} at ({}, {}) rot {}: drill {} x {} -> {:?} slot {} x {}, net {} {}\n",
            record.id,
            record.x,
            record.y,
            record.rotation,
            record.drill_x,
            record.drill_y,
            geometry.orientation,
            geometry.width,
            geometry.length,
            record.net.number,
            record.net.name
        ));
    }
    Ok(report)
}

fn run(args: &Args, options: &SlotOptions) -> Result<(), RunError> {
    let text = read_input(args.input.as_deref())?;
    debug!(bytes = text.len(), "Read board");

    let result = if args.list {
        list_report(&text, options)?
    } else {
        kicad::convert(&text, options)?
    };

    write_output(args.output.as_deref(), &result)
}

/// Prints an error and its source chain to stderr.
fn report(error: &dyn std::error::Error) {
    eprintln!("error: {error}");
    let mut source = error.source();
    while let Some(cause) = source {
        eprintln!("  caused by: {cause}");
        source = cause.source();
    }
}

/// Entry point for plated-slot-converter.
fn main() -> ExitCode {
    let args = Args::parse();

    // Load configuration
    let cfg = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            report(&e);
            return ExitCode::FAILURE;
        }
    };

    // Initialise logging
    let log_level = get_log_level(args.verbose, args.quiet, &cfg.logging.level);
    init_tracing(log_level);

    let mut options = cfg.slot_options();
    if let Some(mode) = args.rotation_mode {
        options.rotation_mode = mode.into();
    }

    info!(
        version = env!("CARGO_PKG_VERSION"),
        min_width = options.min_width,
        rotation_mode = ?options.rotation_mode,
        "Starting plated-slot-converter"
    );

    match run(&args, &options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report(&e);
            ExitCode::FAILURE
        }
    }
}
