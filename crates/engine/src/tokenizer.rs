//! Tokenization: free text to significant lower-case words.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Function words that carry no signal for matching a request to a template.
pub const STOPWORDS: &[&str] = &[
    "the", "and", "is", "a", "an", "to", "for", "on", "in", "of", "it", "this", "that", "i",
    "you", "we", "be", "by", "are", "as", "at", "from", "with", "your", "my", "our", "me", "can",
    "if", "please", "will", "was", "have", "has", "had",
];

static STOPWORD_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STOPWORDS.iter().copied().collect());

pub fn is_stopword(token: &str) -> bool {
    STOPWORD_SET.contains(token)
}

/// Lower-case `text`, treat punctuation as whitespace, split, and drop
/// stopwords. Order and duplicates are preserved.
pub fn tokenize(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    let normalized: String = text
        .to_lowercase()
        .chars()
        .map(|c| {
            if is_word_char(c) || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    normalized
        .split_whitespace()
        .filter(|token| !is_stopword(token))
        .map(str::to_owned)
        .collect()
}

/// ASCII letters, digits and underscore.
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
