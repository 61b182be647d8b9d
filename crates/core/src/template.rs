//! Template and corpus types.
//!
//! A corpus is a handful of example emails separated by `---` lines. Each
//! one is split into the three fragments the assembler recombines.

use serde::{Deserialize, Serialize};

/// One email from the corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    /// The block exactly as it appeared in the corpus, blank lines included.
    pub raw: String,

    /// First non-empty line.
    pub greeting: String,

    /// Interior lines joined with `\n`. Empty for blocks of one or two lines.
    pub body: String,

    /// Last non-empty line.
    pub closing: String,
}

impl Template {
    /// Text considered when scoring a template against a request.
    pub fn searchable_text(&self) -> String {
        [
            self.greeting.as_str(),
            self.body.as_str(),
            self.closing.as_str(),
        ]
        .join(" ")
    }
}

/// An ordered collection of templates.
///
/// Order is the order of appearance in the source text and is what breaks
/// ties during selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Corpus {
    templates: Vec<Template>,
}

impl Corpus {
    pub fn new(templates: Vec<Template>) -> Self {
        Self { templates }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Template> {
        self.templates.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Template> {
        self.templates.iter()
    }

    pub fn templates(&self) -> &[Template] {
        &self.templates
    }
}

impl From<Vec<Template>> for Corpus {
    fn from(templates: Vec<Template>) -> Self {
        Self::new(templates)
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a Template;
    type IntoIter = std::slice::Iter<'a, Template>;

    fn into_iter(self) -> Self::IntoIter {
        self.templates.iter()
    }
}

/// A template paired with its overlap score against one request.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredTemplate<'a> {
    /// Position of the template in its corpus.
    pub index: usize,
    pub score: usize,
    pub template: &'a Template,
    /// Significant tokens of the template text, duplicates included.
    pub tokens: Vec<String>,
}

/// Result of top-K selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection<'a> {
    /// Best templates first, at most K of them.
    pub templates: Vec<&'a Template>,
    /// The tokenized request, kept for diagnostics.
    pub request_tokens: Vec<String>,
}

impl Selection<'_> {
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }
}
