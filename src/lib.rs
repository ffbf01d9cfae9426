//! Password composition filter
//!
//! Classifies candidate passwords, one per line, against four cumulative
//! rule levels and gathers statistics over the whole input.
//!
//! | Level | Rule |
//! |-------|------|
//! | 1 | upper and lower case letters present |
//! | 2 | at least `param` of the groups upper, lower, digit, special (all four always pass) |
//! | 3 | no run of `param` identical characters |
//! | 4 | no substring of length `param` occurs twice |
//!
//! # Features
//!
//! - `cli` (default): Builds the `pwcheck` binary
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use pwcheck::{Config, LineClassifier, StatsAccumulator};
//! use secrecy::SecretString;
//!
//! let config = Config::new(2, 3).expect("valid configuration");
//! let classifier = LineClassifier::new(config);
//! let mut stats = StatsAccumulator::new();
//!
//! for line in ["Password", "Heslo123"] {
//!     let line = SecretString::new(line.to_string().into());
//!     stats.observe(&line);
//!     println!("accepted: {}", classifier.accepts(&line));
//! }
//!
//! let summary = stats.finalize().expect("at least one line");
//! assert_eq!(summary.min_length, 8);
//! ```

mod charclass;
mod classifier;
mod config;
mod error;
mod filter;
mod rules;
mod stats;

#[cfg(feature = "cli")]
pub mod cli;

// Public API
pub use charclass::{CharClass, ClassSet};
pub use classifier::{LineClassifier, Verdict, classify};
pub use config::{Config, FilterOptions, MAX_LEVEL};
pub use error::{PwCheckError, Result};
pub use filter::{FilterReport, filter_lines};
pub use rules::{Rule, RuleResult};
pub use stats::{StatsAccumulator, Summary};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
