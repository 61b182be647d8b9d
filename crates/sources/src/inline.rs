//! In-memory source: useful for testing and for callers that already
//! hold the corpus text.

use async_trait::async_trait;
use mailweave_core::error::SourceError;
use mailweave_core::source::CorpusSource;

#[derive(Debug, Clone)]
pub struct InlineSource {
    text: String,
}

impl InlineSource {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[async_trait]
impl CorpusSource for InlineSource {
    fn name(&self) -> &str {
        "inline"
    }

    fn locator(&self) -> String {
        format!("inline ({} bytes)", self.text.len())
    }

    async fn fetch(&self) -> Result<String, SourceError> {
        Ok(self.text.clone())
    }
}
