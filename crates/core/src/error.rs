//! Error types for the Mailweave domain.
//!
//! Uses `thiserror` for ergonomic error definitions.
//! Each bounded context has its own error type. None of them ever reach
//! the person asking for an email: the orchestrator maps every
//! [`ComposeError`] to one of the [`fallback`] messages.

use thiserror::Error;

/// User-visible apology strings returned instead of an email.
pub mod fallback {
    /// The corpus could not be loaded or contained no templates.
    pub const EMPTY_KNOWLEDGE_BASE: &str = "I'm sorry, my knowledge base is empty.";

    /// Templates exist but none ended up selected.
    pub const NO_SUITABLE_MATCH: &str =
        "I'm sorry, I couldn't find a suitable response. Please try rephrasing your request.";

    /// Something outside the pipeline itself broke.
    pub const SERVICE_UNAVAILABLE: &str =
        "I'm sorry, but I encountered an error and can't respond right now.";
}

/// The top-level error type for all Mailweave operations.
#[derive(Debug, Error)]
pub enum Error {
    // --- Corpus source errors ---
    #[error("Source error: {0}")]
    Source(#[from] SourceError),

    // --- Composition errors ---
    #[error("Compose error: {0}")]
    Compose(#[from] ComposeError),

    // --- Configuration errors ---
    #[error("Configuration error: {message}")]
    Config { message: String },

    // --- Serialization ---
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias using our Error.
pub type Result<T> = std::result::Result<T, Error>;

// --- Bounded context errors ---

/// Failure to obtain raw corpus text.
#[derive(Debug, Clone, Error)]
pub enum SourceError {
    #[error("Failed to read corpus file {path}: {reason}")]
    Io { path: String, reason: String },

    #[error("Corpus request failed: {0}")]
    Http(String),

    #[error("Corpus request to {url} returned status {status_code}")]
    Status { url: String, status_code: u16 },

    #[error("Corpus fetch from {locator} timed out after {timeout_secs}s")]
    Timeout { locator: String, timeout_secs: u64 },

    #[error("Invalid corpus locator: {0}")]
    InvalidLocator(String),
}

/// Why a compose run produced a fallback instead of an email.
#[derive(Debug, Clone, Error)]
pub enum ComposeError {
    #[error("Corpus source unavailable: {0}")]
    SourceUnavailable(#[from] SourceError),

    #[error("Corpus contains no templates")]
    EmptyCorpus,

    #[error("No template was selected for the request")]
    NoMatch,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ComposeError {
    /// The literal message shown in place of an email.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            // An unreachable source is indistinguishable from an empty one
            Self::SourceUnavailable(_) | Self::EmptyCorpus => fallback::EMPTY_KNOWLEDGE_BASE,
            Self::NoMatch => fallback::NO_SUITABLE_MATCH,
            Self::Internal(_) => fallback::SERVICE_UNAVAILABLE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_error_displays_correctly() {
        let err = Error::Source(SourceError::Status {
            url: "https://example.com/corpus.txt".into(),
            status_code: 404,
        });
        assert!(err.to_string().contains("404"));
        assert!(err.to_string().contains("example.com"));
    }

    #[test]
    fn source_failures_read_as_empty_knowledge_base() {
        let err = ComposeError::SourceUnavailable(SourceError::Timeout {
            locator: "https://example.com".into(),
            timeout_secs: 5,
        });
        assert_eq!(err.fallback_message(), fallback::EMPTY_KNOWLEDGE_BASE);
        assert_eq!(
            ComposeError::EmptyCorpus.fallback_message(),
            fallback::EMPTY_KNOWLEDGE_BASE
        );
    }

    #[test]
    fn no_match_and_internal_have_distinct_messages() {
        assert_eq!(
            ComposeError::NoMatch.fallback_message(),
            fallback::NO_SUITABLE_MATCH
        );
        assert_eq!(
            ComposeError::Internal("boom".into()).fallback_message(),
            fallback::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn source_error_converts_into_compose_error() {
        let err: ComposeError = SourceError::Http("connection refused".into()).into();
        assert!(matches!(err, ComposeError::SourceUnavailable(_)));
        assert!(err.to_string().contains("connection refused"));
    }
}
