//! Corpus parsing: raw text to templates.

use mailweave_core::template::{Corpus, Template};

/// Separates templates in corpus text: a line holding only `---`.
pub const TEMPLATE_DELIMITER: &str = "\n---\n";

/// Split corpus text into templates.
///
/// Blank blocks are skipped. Malformed blocks are kept with whatever
/// fragments they have; parsing never fails.
pub fn parse_corpus(raw: &str) -> Corpus {
    let raw = raw.strip_prefix(BYTE_ORDER_MARK).unwrap_or(raw);
    raw.split(TEMPLATE_DELIMITER)
        .filter(|block| !trim_line(block).is_empty())
        .filter_map(parse_block)
        .collect::<Vec<_>>()
        .into()
}

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Whitespace trim that also drops stray byte-order marks.
fn trim_line(line: &str) -> &str {
    line.trim_matches(|c: char| c.is_whitespace() || c == BYTE_ORDER_MARK)
}

fn parse_block(block: &str) -> Option<Template> {
    let lines: Vec<&str> = block
        .split('\n')
        .map(trim_line)
        .filter(|line| !line.is_empty())
        .collect();

    let (first, last) = (lines.first()?, lines.last()?);
    let body = if lines.len() > 2 {
        lines[1..lines.len() - 1].join("\n").trim().to_string()
    } else {
        String::new()
    };

    Some(Template {
        raw: block.to_string(),
        greeting: first.to_string(),
        body,
        closing: last.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_delimiter_line() {
        let corpus = parse_corpus("Hi {name},\nBody one.\nThanks,\n---\nHello,\nBody two.\nCheers,");
        assert_eq!(corpus.len(), 2);

        let first = corpus.get(0).unwrap();
        assert_eq!(first.greeting, "Hi {name},");
        assert_eq!(first.body, "Body one.");
        assert_eq!(first.closing, "Thanks,");

        let second = corpus.get(1).unwrap();
        assert_eq!(second.greeting, "Hello,");
        assert_eq!(second.closing, "Cheers,");
    }

    #[test]
    fn blank_lines_are_ignored_for_fragments_but_kept_in_raw() {
        let block = "Dear {name},\n\n  First paragraph.  \n\nSecond paragraph.\n\nSincerely,\n{your_name}";
        let corpus = parse_corpus(block);
        let t = corpus.get(0).unwrap();
        assert_eq!(t.greeting, "Dear {name},");
        assert_eq!(t.body, "First paragraph.\nSecond paragraph.\nSincerely,");
        assert_eq!(t.closing, "{your_name}");
        assert_eq!(t.raw, block);
    }

    #[test]
    fn single_line_block_is_greeting_and_closing() {
        let corpus = parse_corpus("Just one line");
        let t = corpus.get(0).unwrap();
        assert_eq!(t.greeting, "Just one line");
        assert_eq!(t.body, "");
        assert_eq!(t.closing, "Just one line");
    }

    #[test]
    fn two_line_block_has_empty_body() {
        let corpus = parse_corpus("Hello,\nBye.");
        let t = corpus.get(0).unwrap();
        assert_eq!(t.greeting, "Hello,");
        assert_eq!(t.body, "");
        assert_eq!(t.closing, "Bye.");
    }

    #[test]
    fn whitespace_only_blocks_are_dropped() {
        let corpus = parse_corpus("A\nB\nC\n---\n   \n\t\n---\nD\nE\nF");
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.get(1).unwrap().greeting, "D");
    }

    #[test]
    fn empty_input_yields_empty_corpus() {
        assert!(parse_corpus("").is_empty());
        assert!(parse_corpus("\n\n  \n").is_empty());
    }

    #[test]
    fn dashes_inside_a_line_do_not_split() {
        let corpus = parse_corpus("Hi,\nSee items 2---4 below.\nThanks");
        assert_eq!(corpus.len(), 1);
        assert_eq!(corpus.get(0).unwrap().body, "See items 2---4 below.");
    }

    #[test]
    fn delimiter_with_surrounding_spaces_does_not_split() {
        let corpus = parse_corpus("Hi,\nBody\nThanks\n --- \nHello,\nBody\nBye");
        assert_eq!(corpus.len(), 1);
    }

    #[test]
    fn carriage_returns_are_trimmed_from_lines() {
        let corpus = parse_corpus("Hi {name},\r\nBody line.\r\nThanks,\r");
        let t = corpus.get(0).unwrap();
        assert_eq!(t.greeting, "Hi {name},");
        assert_eq!(t.body, "Body line.");
        assert_eq!(t.closing, "Thanks,");
    }

    #[test]
    fn leading_byte_order_mark_is_dropped() {
        let corpus = parse_corpus("\u{feff}Hi {name},\nBody line.\nThanks,\n---\nHello,\nMore.\nBye");
        let t = corpus.get(0).unwrap();
        assert_eq!(t.greeting, "Hi {name},");
        assert!(!t.raw.starts_with('\u{feff}'));
        assert_eq!(corpus.len(), 2);
    }

    #[test]
    fn byte_order_mark_alone_is_an_empty_corpus() {
        assert!(parse_corpus("\u{feff}").is_empty());
        assert!(parse_corpus("\u{feff}\n\n").is_empty());
    }

    #[test]
    fn order_matches_source() {
        let corpus = parse_corpus("one\n---\ntwo\n---\nthree");
        let greetings: Vec<&str> = corpus.iter().map(|t| t.greeting.as_str()).collect();
        assert_eq!(greetings, vec!["one", "two", "three"]);
    }
}
