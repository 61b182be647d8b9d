//! Overlap scoring.

use std::collections::HashSet;

/// Number of distinct tokens present in both sequences.
pub fn score_overlap<S: AsRef<str>>(request_tokens: &[S], template_tokens: &[S]) -> usize {
    let request: HashSet<&str> = request_tokens.iter().map(AsRef::as_ref).collect();
    let template: HashSet<&str> = template_tokens.iter().map(AsRef::as_ref).collect();
    request.intersection(&template).count()
}
