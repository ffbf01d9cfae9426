//! Case diversity rule - requires both upper and lower case letters.

use super::RuleResult;

/// Checks that the line mixes upper and lower case letters.
///
/// `param` is not used by this rule.
///
/// # Returns
/// - `Some(reason)` if either case is missing
/// - `None` if both cases are present
pub fn case_diversity_rule(chars: &[char], _param: usize) -> RuleResult {
    let has_upper = chars.iter().any(|c| c.is_ascii_uppercase());
    let has_lower = chars.iter().any(|c| c.is_ascii_lowercase());

    match (has_upper, has_lower) {
        (true, true) => None,
        (false, true) => Some("Missing uppercase letter".to_string()),
        (true, false) => Some("Missing lowercase letter".to_string()),
        (false, false) => Some("Missing uppercase and lowercase letters".to_string()),
    }
}
