//! Command-line options and logger setup for the `exact-tsp` binary.

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use env_logger::{Builder, Target};
use exact_tsp::models::Precision;
use log::{Level, LevelFilter, SetLoggerError};

/// Finds the shortest closed route through every city in a JSON file.
#[derive(Debug, Parser)]
#[command(name = "exact-tsp")]
#[command(about = "Tool for calculating the optimal route between cities")]
#[command(version)]
pub struct Cli {
    /// Absolute or relative path to the JSON file containing cities GPS coordinates
    #[arg(long)]
    pub json: PathBuf,

    /// Number of decimals used for rounding (0 disables rounding, default 3)
    #[arg(long)]
    pub precision: Option<u32>,

    /// Show debug logging
    #[arg(long)]
    pub debug: bool,

    /// Log level, overridden by --debug
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// How the best route is printed to stdout
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,
}

impl Cli {
    /// Rounding policy selected on the command line.
    pub fn precision(&self) -> Precision {
        Precision::from_cli(self.precision)
    }

    /// Effective log filter.
    pub fn level_filter(&self) -> LevelFilter {
        if self.debug {
            LevelFilter::Debug
        } else {
            self.log_level.to_filter()
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum LogLevel {
    Error,
    #[value(alias = "warning")]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_filter(self) -> LevelFilter {
        match self {
            Self::Error => LevelFilter::Error,
            Self::Warn => LevelFilter::Warn,
            Self::Info => LevelFilter::Info,
            Self::Debug => LevelFilter::Debug,
            Self::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Installs an `env_logger` writing `LEVEL message` lines to stderr.
pub fn init_logger(filter: LevelFilter) -> Result<(), SetLoggerError> {
    let mut builder = Builder::new();
    builder
        .filter_level(filter)
        .parse_default_env()
        .target(Target::Stderr)
        .format(|buf, record| writeln!(buf, "{}:{}", level_tag(record.level()), record.args()));
    builder.try_init()
}

fn level_tag(level: Level) -> &'static str {
    match level {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    }
}
