//! Composition rules
//!
//! Each rule inspects one aspect of a line and belongs to a strictness level.
//! Levels are cumulative: a classifier at level `n` runs every rule whose
//! level is `<= n`, in level order.

mod case;
mod duplicate;
mod repetition;
mod variety;

pub use case::case_diversity_rule;
pub use duplicate::duplicate_substring_rule;
pub use repetition::run_length_rule;
pub use variety::class_diversity_rule;

/// Result type for rule check functions.
/// - `Some(reason)` - Rule failed with reason
/// - `None` - Rule passed
pub type RuleResult = Option<String>;

/// The built-in rules, one per level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    CaseDiversity,
    ClassDiversity,
    RunLength,
    DuplicateSubstring,
}

impl Rule {
    /// All rules in evaluation order.
    pub const ALL: [Rule; 4] = [
        Rule::CaseDiversity,
        Rule::ClassDiversity,
        Rule::RunLength,
        Rule::DuplicateSubstring,
    ];

    pub fn level(self) -> u8 {
        match self {
            Rule::CaseDiversity => 1,
            Rule::ClassDiversity => 2,
            Rule::RunLength => 3,
            Rule::DuplicateSubstring => 4,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Rule::CaseDiversity => "case",
            Rule::ClassDiversity => "variety",
            Rule::RunLength => "repetition",
            Rule::DuplicateSubstring => "duplicate",
        }
    }

    /// Runs this rule against a line's characters.
    pub fn check(self, chars: &[char], param: usize) -> RuleResult {
        let check_fn: fn(&[char], usize) -> RuleResult = match self {
            Rule::CaseDiversity => case_diversity_rule,
            Rule::ClassDiversity => class_diversity_rule,
            Rule::RunLength => run_length_rule,
            Rule::DuplicateSubstring => duplicate_substring_rule,
        };
        check_fn(chars, param)
    }

    /// Rules active at the given level, in evaluation order.
    pub fn up_to(level: u8) -> impl Iterator<Item = Rule> {
        Rule::ALL.into_iter().filter(move |r| r.level() <= level)
    }
}
