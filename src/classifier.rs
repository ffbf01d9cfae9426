//! Line classifier - runs the active rules in level order.

use secrecy::{ExposeSecret, SecretString};

use crate::config::Config;
use crate::rules::Rule;

/// Outcome of classifying a single line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Accepted,
    Rejected { rule: Rule, reason: String },
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted)
    }

    /// The rule that rejected the line, if any.
    pub fn failed_rule(&self) -> Option<Rule> {
        match self {
            Verdict::Accepted => None,
            Verdict::Rejected { rule, .. } => Some(*rule),
        }
    }
}

/// Decides whether lines satisfy every rule up to the configured level.
#[derive(Debug, Clone, Copy)]
pub struct LineClassifier {
    config: Config,
}

impl LineClassifier {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> Config {
        self.config
    }

    /// Classifies a line, stopping at the first failing rule.
    pub fn classify(&self, line: &SecretString) -> Verdict {
        let chars: Vec<char> = line.expose_secret().chars().collect();
        self.classify_chars(&chars)
    }

    pub(crate) fn classify_chars(&self, chars: &[char]) -> Verdict {
        let param = self.config.param();

        Rule::up_to(self.config.level())
            .find_map(|rule| {
                rule.check(chars, param)
                    .map(|reason| Verdict::Rejected { rule, reason })
            })
            .unwrap_or(Verdict::Accepted)
    }

    pub fn accepts(&self, line: &SecretString) -> bool {
        self.classify(line).is_accepted()
    }
}

/// One-shot classification for callers without a long-lived classifier.
pub fn classify(line: &SecretString, config: Config) -> bool {
    LineClassifier::new(config).accepts(line)
}
