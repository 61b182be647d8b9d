//! Turn a configured locator string into a concrete source.

use mailweave_core::error::SourceError;
use mailweave_core::source::CorpusSource;
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;

use crate::{BuiltinSource, FileSource, HttpSource};

/// Build a source from a locator.
///
/// - `builtin` → the embedded corpus
/// - `http://…` / `https://…` → [`HttpSource`]
/// - anything else → [`FileSource`], with a leading `~/` expanded
pub fn source_from_locator(
    locator: &str,
    timeout: Duration,
) -> Result<Box<dyn CorpusSource>, SourceError> {
    let locator = locator.trim();
    if locator.is_empty() {
        return Err(SourceError::InvalidLocator("empty locator".into()));
    }

    let source: Box<dyn CorpusSource> = if locator.eq_ignore_ascii_case("builtin") {
        Box::new(BuiltinSource)
    } else if locator.starts_with("http://") || locator.starts_with("https://") {
        Box::new(HttpSource::new(locator, timeout)?)
    } else if locator.contains("://") {
        return Err(SourceError::InvalidLocator(format!(
            "unsupported scheme in '{locator}'"
        )));
    } else {
        Box::new(FileSource::new(expand_home(locator)))
    };

    debug!(kind = source.name(), locator = %source.locator(), "Corpus source resolved");
    Ok(source)
}

fn expand_home(path: &str) -> PathBuf {
    match path.strip_prefix("~/") {
        Some(rest) => {
            let home = std::env::var("HOME")
                .or_else(|_| std::env::var("USERPROFILE"))
                .unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(rest)
        }
        None => PathBuf::from(path),
    }
}
