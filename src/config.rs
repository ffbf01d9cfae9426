//! Validated filter configuration.

use crate::error::{PwCheckError, Result};

/// Highest level with a rule attached to it.
pub const MAX_LEVEL: u8 = 4;

/// Strictness level and the threshold each level interprets.
///
/// `level` selects rules `1..=level` cumulatively; `0` disables every rule.
/// `param` is always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    level: u8,
    param: usize,
}

impl Config {
    /// Builds a configuration from raw integers as supplied on the command line.
    ///
    /// # Errors
    ///
    /// - [`PwCheckError::InvalidLevel`] if `level` is outside `0..=4`
    /// - [`PwCheckError::InvalidParam`] if `param` is not positive
    pub fn new(level: i64, param: i64) -> Result<Self> {
        let level = u8::try_from(level)
            .ok()
            .filter(|l| *l <= MAX_LEVEL)
            .ok_or(PwCheckError::InvalidLevel(level))?;
        let param = usize::try_from(param)
            .ok()
            .filter(|p| *p >= 1)
            .ok_or(PwCheckError::InvalidParam(param))?;
        Ok(Self { level, param })
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn param(&self) -> usize {
        self.param
    }
}

/// Options for the stream driver that sit outside the rule configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterOptions {
    /// Collect statistics and return a summary at end of stream.
    pub report_stats: bool,
    /// Abort with [`PwCheckError::LineTooLong`] for lines longer than this.
    pub max_line_length: Option<usize>,
}
