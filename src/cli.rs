//! Command-line interface
//!
//! Accepts both `pwcheck LEVEL PARAM [--stats]` and
//! `pwcheck -l LEVEL -p PARAM [--stats]`. Accepted passwords go to stdout,
//! diagnostics go to stderr.

use std::io::{self, BufRead, BufWriter, Write};

use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use crate::config::{Config, FilterOptions};
use crate::error::{PwCheckError, Result};
use crate::filter::filter_lines;
use crate::stats::Summary;
use crate::{EXIT_FAILURE, EXIT_SUCCESS};

const DEFAULT_LEVEL: i64 = 1;
const DEFAULT_PARAM: i64 = 1;

#[derive(Parser, Debug)]
#[command(name = "pwcheck")]
#[command(version, about = "Filter candidate passwords read from stdin")]
#[command(long_about = "Reads one password per line from stdin and prints those that \
    satisfy every rule up to LEVEL.\n\n\
    Levels:\n  \
    1 - upper and lower case letters\n  \
    2 - at least PARAM character groups (upper, lower, digit, special)\n  \
    3 - no run of PARAM identical characters\n  \
    4 - no substring of length PARAM occurs twice")]
#[command(allow_negative_numbers = true)]
pub struct Cli {
    /// Strictness level (0-4)
    #[arg(value_name = "LEVEL", conflicts_with = "level_flag")]
    pub level: Option<i64>,

    /// Threshold used by the active rules
    #[arg(value_name = "PARAM", conflicts_with = "param_flag")]
    pub param: Option<i64>,

    /// Strictness level (0-4), flag form
    #[arg(short = 'l', long = "level", value_name = "LEVEL")]
    pub level_flag: Option<i64>,

    /// Rule threshold, flag form
    #[arg(short = 'p', long = "param", value_name = "PARAM")]
    pub param_flag: Option<i64>,

    /// Print statistics over all input lines
    #[arg(long)]
    pub stats: bool,

    /// Abort when a line is longer than N characters
    #[arg(long, value_name = "N")]
    pub max_length: Option<usize>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn level(&self) -> i64 {
        self.level.or(self.level_flag).unwrap_or(DEFAULT_LEVEL)
    }

    pub fn param(&self) -> i64 {
        self.param.or(self.param_flag).unwrap_or(DEFAULT_PARAM)
    }

    pub fn options(&self) -> FilterOptions {
        FilterOptions {
            report_stats: self.stats,
            max_line_length: self.max_length,
        }
    }
}

/// Runs the binary and returns its exit code.
pub fn run() -> i32 {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();

    match execute(&cli, stdin, stdout) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .try_init();
}

/// Filters `reader` into `writer` according to `cli`, appending the
/// statistics report when requested.
///
/// An input without any line still gets a report, with every field zero.
pub fn execute<R: BufRead, W: Write>(cli: &Cli, reader: R, writer: W) -> Result<()> {
    let config = Config::new(cli.level(), cli.param())?;
    let mut out = BufWriter::new(writer);

    let summary = match filter_lines(reader, &mut out, config, cli.options()) {
        Ok(report) => report.summary,
        Err(PwCheckError::EmptyStream) => {
            tracing::warn!("No input lines, reporting empty statistics");
            Some(Summary::default())
        }
        Err(e) => return Err(e),
    };

    if let Some(summary) = summary {
        write!(out, "{summary}")?;
    }
    out.flush()?;
    Ok(())
}
