//! Duplicate substring rule - rejects any window of `param` characters that occurs twice.

use std::collections::HashSet;

use super::RuleResult;

/// Checks that no substring of exactly `param` characters occurs more than once.
///
/// Occurrences may overlap, so `"aaa"` with `param == 2` fails. When `param`
/// is larger than the line there are no windows and the rule passes.
///
/// # Returns
/// - `Some(reason)` if a repeated window exists
/// - `None` otherwise
pub fn duplicate_substring_rule(chars: &[char], param: usize) -> RuleResult {
    if param == 0 || param > chars.len() {
        return None;
    }

    let mut seen: HashSet<&[char]> = HashSet::with_capacity(chars.len() + 1 - param);
    for window in chars.windows(param) {
        if !seen.insert(window) {
            return Some(format!(
                "Line contains a repeated sequence of {} characters",
                param
            ));
        }
    }
    None
}
