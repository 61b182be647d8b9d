//! File-based corpus source: plain UTF-8 text on local disk.
//!
//! The file is read fresh on every fetch so edits show up on the next
//! request without a restart.

use async_trait::async_trait;
use mailweave_core::error::SourceError;
use mailweave_core::source::CorpusSource;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CorpusSource for FileSource {
    fn name(&self) -> &str {
        "file"
    }

    fn locator(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> Result<String, SourceError> {
        let text = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| SourceError::Io {
                path: self.path.display().to_string(),
                reason: e.to_string(),
            })?;

        debug!(path = %self.path.display(), bytes = text.len(), "Corpus file loaded");
        Ok(text)
    }
}
