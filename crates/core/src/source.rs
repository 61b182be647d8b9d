//! Corpus source trait: where the raw template text comes from.
//!
//! A source yields the whole corpus as one UTF-8 string. Fetching may fail
//! (missing file, unreachable host); callers treat that as an empty corpus
//! rather than an error worth surfacing.

use async_trait::async_trait;

use crate::error::SourceError;

/// The core CorpusSource trait.
///
/// Implementations: file, HTTP, built-in, inline (for testing).
#[async_trait]
pub trait CorpusSource: Send + Sync {
    /// The source kind (e.g., "file", "http", "builtin").
    fn name(&self) -> &str;

    /// Human-readable location, used in logs and error messages.
    fn locator(&self) -> String;

    /// Load the raw corpus text.
    async fn fetch(&self) -> std::result::Result<String, SourceError>;
}
