//! The corpus shipped inside the binary.

use async_trait::async_trait;
use mailweave_core::error::SourceError;
use mailweave_core::source::CorpusSource;

/// Twenty-one short business emails covering follow-ups, invoices,
/// meetings, apologies, introductions and the like.
pub const BUILTIN_CORPUS: &str = include_str!("../corpus/default.txt");

/// Serves [`BUILTIN_CORPUS`]. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinSource;

#[async_trait]
impl CorpusSource for BuiltinSource {
    fn name(&self) -> &str {
        "builtin"
    }

    fn locator(&self) -> String {
        "builtin".into()
    }

    async fn fetch(&self) -> Result<String, SourceError> {
        Ok(BUILTIN_CORPUS.to_string())
    }
}
