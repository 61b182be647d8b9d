//! Corpus source implementations for Mailweave.

pub mod builtin;
pub mod file;
pub mod http;
pub mod inline;
pub mod locator;

pub use builtin::{BUILTIN_CORPUS, BuiltinSource};
pub use file::FileSource;
pub use http::HttpSource;
pub use inline::InlineSource;
pub use locator::source_from_locator;
