//! Stream driver
//!
//! Reads lines from a reader, records statistics for every line, and copies
//! accepted lines to a writer byte-for-byte.

use std::io::{BufRead, Write};

use secrecy::{ExposeSecret, SecretString};

use crate::classifier::{LineClassifier, Verdict};
use crate::config::{Config, FilterOptions};
use crate::error::{PwCheckError, Result};
use crate::stats::{StatsAccumulator, Summary};

/// Totals for one pass over an input stream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterReport {
    pub total: usize,
    pub accepted: usize,
    /// Present only when statistics were requested.
    pub summary: Option<Summary>,
}

/// Filters `reader` into `writer`.
///
/// Lines are split on `\n`; a trailing `\r\n` or `\n` is stripped before
/// classification and statistics. Input
/// that is not valid UTF-8 is decoded lossily for classification and
/// statistics, while accepted lines are written back exactly as read.
///
/// # Errors
///
/// - [`PwCheckError::Io`] if reading or writing fails
/// - [`PwCheckError::LineTooLong`] if `options.max_line_length` is exceeded
/// - [`PwCheckError::EmptyStream`] if statistics were requested and the
///   input held no lines
pub fn filter_lines<R: BufRead, W: Write>(
    mut reader: R,
    mut writer: W,
    config: Config,
    options: FilterOptions,
) -> Result<FilterReport> {
    let classifier = LineClassifier::new(config);
    let mut stats = StatsAccumulator::new();
    let mut accepted = 0;
    let mut raw = Vec::new();

    loop {
        raw.clear();
        if reader.read_until(b'\n', &mut raw)? == 0 {
            break;
        }
        let line_number = stats.count() + 1;

        let content = raw
            .strip_suffix(b"\r\n")
            .or_else(|| raw.strip_suffix(b"\n"))
            .unwrap_or(&raw[..]);
        let line = SecretString::new(String::from_utf8_lossy(content).into());

        if let Some(max) = options.max_line_length {
            if line.expose_secret().chars().count() > max {
                #[cfg(feature = "tracing")]
                tracing::error!("Line {} exceeds {} characters, aborting", line_number, max);
                return Err(PwCheckError::LineTooLong {
                    line: line_number,
                    max,
                });
            }
        }

        stats.observe(&line);

        match classifier.classify(&line) {
            Verdict::Accepted => {
                writer.write_all(&raw)?;
                accepted += 1;
            }
            #[cfg(feature = "tracing")]
            Verdict::Rejected { rule, reason } => {
                tracing::debug!(
                    "Line {} rejected by {} rule: {}",
                    line_number,
                    rule.name(),
                    reason
                );
            }
            #[cfg(not(feature = "tracing"))]
            Verdict::Rejected { .. } => {}
        }
    }
    writer.flush()?;

    let total = stats.count();

    #[cfg(feature = "tracing")]
    tracing::info!("Accepted {} of {} lines", accepted, total);

    let summary = if options.report_stats {
        Some(stats.finalize()?)
    } else {
        None
    };

    Ok(FilterReport {
        total,
        accepted,
        summary,
    })
}
