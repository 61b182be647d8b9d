//! One request, start to finish: load → parse → select → assemble.
//!
//! # Never fails
//!
//! The `compose*` methods always return a string. Anything that goes wrong
//! on the way becomes a [`ComposeError`], is logged, and is replaced by its
//! fallback message. Use the `try_*` variants to see the typed outcome.

use mailweave_config::{AppConfig, DEFAULT_TOP_K};
use mailweave_core::error::{ComposeError, SourceError};
use mailweave_core::source::CorpusSource;
use mailweave_core::template::Corpus;
use mailweave_core::variables::VariableMap;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::assembler::assemble;
use crate::parser::parse_corpus;
use crate::selector::select;

const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Runs the compose pipeline. Holds settings only, no per-request state.
#[derive(Debug, Clone, Copy)]
pub struct Composer {
    top_k: usize,
    fetch_timeout: Duration,
}

impl Composer {
    pub fn new() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new()
            .with_top_k(config.selection.top_k)
            .with_fetch_timeout(Duration::from_secs(config.corpus.timeout_secs))
    }

    /// How many templates to draw fragments from.
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    /// Upper bound on [`load_corpus`](Self::load_corpus).
    pub fn with_fetch_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout = timeout;
        self
    }

    pub fn top_k(&self) -> usize {
        self.top_k
    }

    pub fn fetch_timeout(&self) -> Duration {
        self.fetch_timeout
    }

    /// Compose against an already-parsed corpus.
    pub fn try_compose(
        &self,
        corpus: &Corpus,
        request: &str,
        vars: &VariableMap,
    ) -> Result<String, ComposeError> {
        if corpus.is_empty() {
            return Err(ComposeError::EmptyCorpus);
        }

        let selection = select(corpus, request, self.top_k);
        if selection.is_empty() {
            return Err(ComposeError::NoMatch);
        }

        info!(
            templates = corpus.len(),
            selected = selection.len(),
            request_tokens = selection.request_tokens.len(),
            "Email composed"
        );
        Ok(assemble(&selection.templates, vars))
    }

    pub fn compose(&self, corpus: &Corpus, request: &str, vars: &VariableMap) -> String {
        self.try_compose(corpus, request, vars)
            .unwrap_or_else(|e| degrade(&e))
    }

    /// Parse `raw` and compose. The corpus is not kept.
    pub fn compose_raw(&self, raw: &str, request: &str, vars: &VariableMap) -> String {
        let corpus = parse_corpus(raw);
        self.compose(&corpus, request, vars)
    }

    /// Fetch and parse the corpus, bounded by the fetch timeout.
    pub async fn load_corpus(&self, source: &dyn CorpusSource) -> Result<Corpus, SourceError> {
        let raw = match tokio::time::timeout(self.fetch_timeout, source.fetch()).await {
            Ok(result) => result?,
            Err(_) => {
                return Err(SourceError::Timeout {
                    locator: source.locator(),
                    timeout_secs: self.fetch_timeout.as_secs(),
                });
            }
        };

        let corpus = parse_corpus(&raw);
        debug!(
            source = source.name(),
            locator = %source.locator(),
            templates = corpus.len(),
            "Corpus loaded"
        );
        Ok(corpus)
    }

    pub async fn try_compose_from_source(
        &self,
        source: &dyn CorpusSource,
        request: &str,
        vars: &VariableMap,
    ) -> Result<String, ComposeError> {
        let corpus = self.load_corpus(source).await?;
        self.try_compose(&corpus, request, vars)
    }

    /// Full pipeline including the fetch. An unreachable source reads as
    /// an empty corpus.
    pub async fn compose_from_source(
        &self,
        source: &dyn CorpusSource,
        request: &str,
        vars: &VariableMap,
    ) -> String {
        self.try_compose_from_source(source, request, vars)
            .await
            .unwrap_or_else(|e| degrade(&e))
    }
}

impl Default for Composer {
    fn default() -> Self {
        Self::new()
    }
}

fn degrade(error: &ComposeError) -> String {
    warn!(error = %error, "Compose fell back to apology message");
    error.fallback_message().to_string()
}
