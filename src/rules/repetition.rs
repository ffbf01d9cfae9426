//! Run length rule - rejects runs of the same character.

use super::RuleResult;

/// Checks that no run of identical consecutive characters reaches `param`.
///
/// With `param == 1` every non-empty line fails; an empty line has no runs.
///
/// # Returns
/// - `Some(reason)` if a run of length `>= param` exists
/// - `None` otherwise
pub fn run_length_rule(chars: &[char], param: usize) -> RuleResult {
    let longest = chars
        .chunk_by(|a, b| a == b)
        .map(<[char]>::len)
        .max()
        .unwrap_or(0);

    if longest > 0 && longest >= param {
        return Some(format!(
            "Line repeats a character {} times in a row (limit {})",
            longest, param
        ));
    }
    None
}
