//! Email assembly: recombine fragments of the selected templates.
//!
//! The greeting comes from the best match, the body from the runner-up
//! (when it has one), and the closing from the last selected template.
//! Mixing sources this way varies the wording while keeping the strongest
//! match in front.

use mailweave_core::error::fallback;
use mailweave_core::template::Template;
use mailweave_core::variables::VariableMap;

/// Build the email text from templates in rank order.
///
/// An empty selection yields [`fallback::NO_SUITABLE_MATCH`].
pub fn assemble(selected: &[&Template], vars: &VariableMap) -> String {
    let (Some(first), Some(last)) = (selected.first(), selected.last()) else {
        return fallback::NO_SUITABLE_MATCH.to_string();
    };

    // Only the runner-up is consulted; a blank body there falls back to
    // the top template, never further down the list.
    let body = match selected.get(1) {
        Some(second) if !second.body.is_empty() => &second.body,
        _ => &first.body,
    };

    [&first.greeting, body, &last.closing]
        .into_iter()
        .map(|part| fill_placeholders(part, vars))
        .filter(|part| !part.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Replace every `{key}` whose key is in `vars`.
///
/// Unknown placeholders and stray braces are copied through unchanged.
/// Inserted values are not scanned again.
pub fn fill_placeholders(text: &str, vars: &VariableMap) -> String {
    if vars.is_empty() || !text.contains('{') {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let Some(close) = after.find('}') else {
            out.push_str(&rest[open..]);
            return out;
        };

        match vars.get(&after[..close]) {
            Some(value) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                // Keep the brace and rescan from the next character so a
                // nested "{{name}}" still resolves its inner placeholder.
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template(greeting: &str, body: &str, closing: &str) -> Template {
        Template {
            raw: format!("{greeting}\n{body}\n{closing}"),
            greeting: greeting.into(),
            body: body.into(),
            closing: closing.into(),
        }
    }

    fn vars() -> VariableMap {
        VariableMap::new()
            .with("name", "Ava")
            .with("your_name", "Sam")
            .with("date", "May 3")
    }

    #[test]
    fn unknown_placeholder_left_intact() {
        let only_name = VariableMap::new().with("name", "Ava");
        assert_eq!(
            fill_placeholders("Hi {name}, re {topic}", &only_name),
            "Hi Ava, re {topic}"
        );
    }

    #[test]
    fn every_occurrence_replaced() {
        assert_eq!(
            fill_placeholders("{name}, {name}! See you {date}.", &vars()),
            "Ava, Ava! See you May 3."
        );
    }

    #[test]
    fn values_are_not_rescanned() {
        let vars = VariableMap::new()
            .with("topic", "{name}'s contract")
            .with("name", "Ava");
        assert_eq!(
            fill_placeholders("About {topic}", &vars),
            "About {name}'s contract"
        );
    }

    #[test]
    fn stray_and_nested_braces() {
        assert_eq!(fill_placeholders("open { brace", &vars()), "open { brace");
        assert_eq!(fill_placeholders("{{name}}", &vars()), "{Ava}");
        assert_eq!(fill_placeholders("{} and {name}", &vars()), "{} and Ava");
        assert_eq!(fill_placeholders("tail {name", &vars()), "tail {name");
    }

    #[test]
    fn empty_map_is_identity() {
        let text = "Hi {name}";
        assert_eq!(fill_placeholders(text, &VariableMap::new()), text);
    }

    #[test]
    fn empty_selection_returns_fallback() {
        assert_eq!(assemble(&[], &vars()), fallback::NO_SUITABLE_MATCH);
    }

    #[test]
    fn single_template_uses_all_its_parts() {
        let t = template("Hi {name},", "Body for {date}.", "{your_name}");
        assert_eq!(assemble(&[&t], &vars()), "Hi Ava,\n\nBody for May 3.\n\nSam");
    }

    #[test]
    fn greeting_first_body_second_closing_last() {
        let t1 = template("Hi {name},", "First body.", "First closing");
        let t2 = template("Hello,", "Second body.", "Second closing");
        let t3 = template("Dear,", "Third body.", "Third closing");
        assert_eq!(
            assemble(&[&t1, &t2, &t3], &vars()),
            "Hi Ava,\n\nSecond body.\n\nThird closing"
        );
    }

    #[test]
    fn empty_second_body_falls_back_to_first_only() {
        let t1 = template("Hi,", "First body.", "One");
        let t2 = template("Hello,", "", "Two");
        let t3 = template("Dear,", "Third body.", "Three");
        assert_eq!(
            assemble(&[&t1, &t2, &t3], &vars()),
            "Hi,\n\nFirst body.\n\nThree"
        );
    }

    #[test]
    fn empty_parts_are_omitted() {
        let t1 = template("Hi,", "", "Bye");
        let t2 = template("Hello,", "", "   ");
        assert_eq!(assemble(&[&t1, &t2], &vars()), "Hi,");
    }

    #[test]
    fn part_emptied_by_substitution_is_omitted() {
        let t = template("Hi {name},", "{blank}", "Thanks");
        let vars = vars().with("blank", "  ");
        assert_eq!(assemble(&[&t], &vars), "Hi Ava,\n\nThanks");
    }

    #[test]
    fn deterministic() {
        let t1 = template("Hi {name},", "Body {date}", "Regards");
        let t2 = template("Hello,", "Other {topic}", "Cheers");
        let a = assemble(&[&t1, &t2], &vars());
        let b = assemble(&[&t1, &t2], &vars());
        assert_eq!(a, b);
    }
}
