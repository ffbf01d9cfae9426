//! Class diversity rule - counts upper, lower, digit and special characters.

use crate::charclass::{CharClass, ClassSet};

use super::RuleResult;

/// Checks that at least `param` character classes are present.
///
/// A line containing all four classes always passes, even when `param`
/// is larger than four.
///
/// # Returns
/// - `Some(reason)` listing the missing classes
/// - `None` if enough classes are present
pub fn class_diversity_rule(chars: &[char], param: usize) -> RuleResult {
    let classes = ClassSet::of_chars(chars);
    if classes.len() >= param || classes.is_complete() {
        return None;
    }

    let missing: Vec<_> = classes
        .missing()
        .map(|class| match class {
            CharClass::Upper => "uppercase",
            CharClass::Lower => "lowercase",
            CharClass::Digit => "numbers",
            CharClass::Special => "special characters",
        })
        .collect();

    Some(format!(
        "Only {} of {} character groups present, missing: {}",
        classes.len(),
        param,
        missing.join(", ")
    ))
}
