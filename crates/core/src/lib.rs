//! # Mailweave Core
//!
//! Domain types, traits, and error definitions for the Mailweave template
//! engine. This crate does **no I/O**; it defines the
//! domain model that the engine, sources, gateway and CLI build against.
//!
//! ## Design Philosophy
//!
//! The one external seam (where corpus text comes from) is defined as a
//! trait here. Implementations live in `mailweave-sources`. This enables:
//! - Swapping the corpus location via configuration
//! - Easy testing with inline or failing sources
//! - Clean dependency graph (all crates depend inward on core)

pub mod error;
pub mod source;
pub mod template;
pub mod variables;

// Re-export key types at crate root for ergonomics
pub use error::{ComposeError, Error, Result, SourceError};
pub use source::CorpusSource;
pub use template::{Corpus, ScoredTemplate, Selection, Template};
pub use variables::VariableMap;
