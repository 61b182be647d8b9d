//! The template retrieval-and-assembly engine.
//!
//! A request flows through the pipeline in one synchronous pass:
//!
//! 1. **Parse** the raw corpus into templates ([`parser`])
//! 2. **Tokenize** the request and every template ([`tokenizer`])
//! 3. **Score** lexical overlap between them ([`scorer`])
//! 4. **Select** the top K templates, ties in corpus order ([`selector`])
//! 5. **Assemble** greeting, body and closing from the selection and
//!    fill in placeholders ([`assembler`])
//!
//! [`Composer`] runs the whole thing and turns every failure into one of
//! the fixed apology messages. Nothing is cached between calls.

pub mod assembler;
pub mod orchestrator;
pub mod parser;
pub mod scorer;
pub mod selector;
pub mod tokenizer;
pub mod variables;

pub use assembler::{assemble, fill_placeholders};
pub use orchestrator::Composer;
pub use parser::{TEMPLATE_DELIMITER, parse_corpus};
pub use scorer::score_overlap;
pub use selector::{Ranking, rank, select};
pub use tokenizer::{STOPWORDS, is_stopword, tokenize};
pub use variables::VariableBuilder;
