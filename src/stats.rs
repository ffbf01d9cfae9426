//! Statistics accumulator
//!
//! Observes every input line, accepted or not, and summarizes the whole
//! stream once it is exhausted.

use std::collections::HashSet;
use std::fmt;

use secrecy::{ExposeSecret, SecretString};

use crate::error::{PwCheckError, Result};

/// Aggregates over an entire input stream.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Summary {
    /// Distinct characters seen across all lines.
    pub distinct_count: usize,
    /// Shortest line length, in characters.
    pub min_length: usize,
    /// Mean line length, rounded to one decimal digit.
    pub average_length: f64,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Statistika:")?;
        writeln!(f, "Ruznych znaku: {}", self.distinct_count)?;
        writeln!(f, "Minimalni delka: {}", self.min_length)?;
        writeln!(f, "Prumerna delka: {:.1}", self.average_length)
    }
}

#[derive(Debug, Default)]
pub struct StatsAccumulator {
    distinct_chars: HashSet<char>,
    lengths: Vec<usize>,
}

impl StatsAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a line's length and characters.
    pub fn observe(&mut self, line: &SecretString) {
        let chars: Vec<char> = line.expose_secret().chars().collect();
        self.observe_chars(&chars);
    }

    pub(crate) fn observe_chars(&mut self, chars: &[char]) {
        self.lengths.push(chars.len());
        self.distinct_chars.extend(chars.iter().copied());
    }

    /// Number of lines observed so far.
    pub fn count(&self) -> usize {
        self.lengths.len()
    }

    /// Summarizes everything observed.
    ///
    /// # Errors
    ///
    /// Returns [`PwCheckError::EmptyStream`] if no line was ever observed.
    /// A single empty line is a valid observation.
    pub fn finalize(&self) -> Result<Summary> {
        let min_length = *self.lengths.iter().min().ok_or(PwCheckError::EmptyStream)?;
        let total: usize = self.lengths.iter().sum();

        Ok(Summary {
            distinct_count: self.distinct_chars.len(),
            min_length,
            average_length: round_to_tenth(total as f64 / self.lengths.len() as f64),
        })
    }
}

/// Rounds the exact binary value to one decimal digit, ties to even.
///
/// Decimal formatting is correctly rounded, so `0.25` becomes `0.2` and a
/// mean such as `7 / 20`, stored just below `0.35`, becomes `0.3`.
fn round_to_tenth(value: f64) -> f64 {
    format!("{value:.1}").parse().unwrap_or(value)
}
