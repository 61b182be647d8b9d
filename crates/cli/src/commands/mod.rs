//! Subcommand implementations and the helpers they share.

pub mod compose;
pub mod config_cmd;
pub mod doctor;
pub mod init;
pub mod rank;
pub mod serve;
pub mod templates;

use mailweave_config::AppConfig;
use mailweave_core::error::{Error, SourceError};
use mailweave_core::source::CorpusSource;
use mailweave_core::template::Corpus;
use mailweave_engine::Composer;
use std::time::Duration;

/// Parse a `KEY=VALUE` pair for `--var`.
pub fn parse_var(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid KEY=VALUE: no '=' found in '{s}'"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("invalid KEY=VALUE: empty key in '{s}'"));
    }
    Ok((key.to_string(), value.to_string()))
}

/// Load the config and apply a `--corpus` override.
pub fn load_config(corpus: Option<String>) -> mailweave_core::Result<AppConfig> {
    let mut config = AppConfig::load().map_err(|e| Error::Config {
        message: e.to_string(),
    })?;
    if let Some(locator) = corpus {
        config.corpus.source = locator;
    }
    Ok(config)
}

pub fn open_source(config: &AppConfig) -> Result<Box<dyn CorpusSource>, SourceError> {
    mailweave_sources::source_from_locator(
        &config.corpus.source,
        Duration::from_secs(config.corpus.timeout_secs),
    )
}

/// Fetch and parse the configured corpus, for the diagnostic commands.
pub async fn load_corpus(config: &AppConfig) -> mailweave_core::Result<Corpus> {
    let source = open_source(config)?;
    let corpus = Composer::from_config(config)
        .load_corpus(source.as_ref())
        .await?;
    Ok(corpus)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_var_splits_on_first_equals() {
        assert_eq!(
            parse_var("topic=a=b").unwrap(),
            ("topic".to_string(), "a=b".to_string())
        );
        assert_eq!(
            parse_var(" name =Ava").unwrap(),
            ("name".to_string(), "Ava".to_string())
        );
    }

    #[test]
    fn parse_var_allows_empty_value() {
        assert_eq!(
            parse_var("company=").unwrap(),
            ("company".to_string(), String::new())
        );
    }

    #[tokio::test]
    async fn load_corpus_reports_bad_locator() {
        let mut config = AppConfig::default();
        config.corpus.source = "ftp://example.com/corpus.txt".into();
        assert!(matches!(
            load_corpus(&config).await,
            Err(Error::Source(SourceError::InvalidLocator(_)))
        ));
    }

    #[tokio::test]
    async fn load_corpus_reads_builtin() {
        let corpus = load_corpus(&AppConfig::default()).await.unwrap();
        assert_eq!(corpus.len(), 21);
    }

    #[test]
    fn parse_var_rejects_malformed() {
        assert!(parse_var("no-equals").is_err());
        assert!(parse_var("=value").is_err());
    }
}
