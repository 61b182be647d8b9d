//! Top-K template selection.

use mailweave_core::template::{Corpus, ScoredTemplate, Selection};
use tracing::debug;

use crate::scorer::score_overlap;
use crate::tokenizer::tokenize;

/// Every template in a corpus scored against one request, best first.
#[derive(Debug, Clone)]
pub struct Ranking<'a> {
    pub request_tokens: Vec<String>,
    pub entries: Vec<ScoredTemplate<'a>>,
}

/// Score every template in `corpus` against `request`.
///
/// Sorting is stable, so templates with equal scores stay in corpus order.
pub fn rank<'a>(corpus: &'a Corpus, request: &str) -> Ranking<'a> {
    let request_tokens = tokenize(request);

    let mut entries: Vec<ScoredTemplate<'a>> = corpus
        .iter()
        .enumerate()
        .map(|(index, template)| {
            let tokens = tokenize(&template.searchable_text());
            let score = score_overlap(&request_tokens, &tokens);
            ScoredTemplate {
                index,
                score,
                template,
                tokens,
            }
        })
        .collect();

    entries.sort_by(|a, b| b.score.cmp(&a.score));

    Ranking {
        request_tokens,
        entries,
    }
}

/// The `top_k` best templates for `request`.
///
/// An empty corpus (or `top_k == 0`) gives an empty selection.
pub fn select<'a>(corpus: &'a Corpus, request: &str, top_k: usize) -> Selection<'a> {
    let Ranking {
        request_tokens,
        entries,
    } = rank(corpus, request);

    let templates: Vec<_> = entries
        .iter()
        .take(top_k)
        .map(|entry| entry.template)
        .collect();

    debug!(
        request_tokens = request_tokens.len(),
        candidates = entries.len(),
        selected = templates.len(),
        top_score = entries.first().map(|e| e.score).unwrap_or(0),
        "Templates selected"
    );

    Selection {
        templates,
        request_tokens,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_corpus;

    const CORPUS: &str = "\
Hi {name},
I am following up on the invoice for {product}.
Regards,
---
Hello {name},
Reminder about our meeting on {date} at {time}.
Thanks,
---
Dear {name},
Sorry for the delay on the invoice, the meeting moved.
Sincerely,
---
Hey {name},
Congrats on the launch.
Cheers,";

    fn greetings(selection: &Selection<'_>) -> Vec<String> {
        selection
            .templates
            .iter()
            .map(|t| t.greeting.clone())
            .collect()
    }

    #[test]
    fn highest_overlap_first() {
        let corpus = parse_corpus(CORPUS);
        let selection = select(&corpus, "Send a reminder about the meeting time", 3);
        assert_eq!(selection.templates[0].greeting, "Hello {name},");
        assert_eq!(selection.len(), 3);
    }

    #[test]
    fn ties_keep_corpus_order() {
        let corpus = parse_corpus(CORPUS);
        let selection = select(&corpus, "zebra xylophone", 3);
        assert_eq!(
            greetings(&selection),
            vec!["Hi {name},", "Hello {name},", "Dear {name},"]
        );
    }

    #[test]
    fn equal_nonzero_scores_keep_corpus_order() {
        let corpus = parse_corpus(CORPUS);
        // "invoice" appears in the first and third templates only
        let selection = select(&corpus, "invoice", 4);
        assert_eq!(
            greetings(&selection),
            vec!["Hi {name},", "Dear {name},", "Hello {name},", "Hey {name},"]
        );
    }

    #[test]
    fn returns_request_tokens() {
        let corpus = parse_corpus(CORPUS);
        let selection = select(&corpus, "Please follow up on the invoice!", 1);
        assert_eq!(selection.request_tokens, vec!["follow", "up", "invoice"]);
    }

    #[test]
    fn fewer_templates_than_k() {
        let corpus = parse_corpus("Hi,\nBody\nBye\n---\nHello,\nBody\nCheers");
        assert_eq!(select(&corpus, "anything", 3).len(), 2);
    }

    #[test]
    fn empty_corpus_gives_empty_selection() {
        let corpus = parse_corpus("");
        let selection = select(&corpus, "follow up on the invoice", 3);
        assert!(selection.is_empty());
        assert_eq!(selection.request_tokens, vec!["follow", "up", "invoice"]);
    }

    #[test]
    fn zero_k_gives_empty_selection() {
        let corpus = parse_corpus(CORPUS);
        assert!(select(&corpus, "invoice", 0).is_empty());
    }

    #[test]
    fn rank_scores_every_template() {
        let corpus = parse_corpus(CORPUS);
        let ranking = rank(&corpus, "invoice meeting delay");
        assert_eq!(ranking.entries.len(), 4);

        let top = &ranking.entries[0];
        assert_eq!(top.index, 2);
        assert_eq!(top.score, 3);
        assert!(top.tokens.contains(&"delay".to_string()));

        let scores: Vec<usize> = ranking.entries.iter().map(|e| e.score).collect();
        assert_eq!(scores, vec![3, 1, 1, 0]);
        let order: Vec<usize> = ranking.entries.iter().map(|e| e.index).collect();
        assert_eq!(order, vec![2, 0, 1, 3]);
    }
}
