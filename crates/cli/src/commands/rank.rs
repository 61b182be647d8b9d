//! `mailweave rank`: Show how every template scores against a request.

use mailweave_engine::{Ranking, rank};

use super::{load_config, load_corpus};

pub async fn run(
    request: String,
    top_k: Option<usize>,
    corpus: Option<String>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(corpus)?;
    let corpus = load_corpus(&config).await?;

    let ranking = rank(&corpus, &request);
    let limit = top_k.unwrap_or(ranking.entries.len());

    if json {
        println!("{}", render_json(&ranking, corpus.len(), limit)?);
        return Ok(());
    }

    println!("Request tokens: {}", ranking.request_tokens.join(" "));
    println!("Templates:      {}\n", corpus.len());
    println!("  {:>5}  {:>5}  Greeting", "Index", "Score");
    for entry in ranking.entries.iter().take(limit) {
        println!(
            "  {:>5}  {:>5}  {}",
            entry.index, entry.score, entry.template.greeting
        );
    }

    Ok(())
}

fn render_json(ranking: &Ranking<'_>, templates: usize, limit: usize) -> mailweave_core::Result<String> {
    let entries: Vec<_> = ranking
        .entries
        .iter()
        .take(limit)
        .map(|entry| {
            serde_json::json!({
                "index": entry.index,
                "score": entry.score,
                "greeting": entry.template.greeting,
                "closing": entry.template.closing,
            })
        })
        .collect();

    let out = serde_json::json!({
        "request_tokens": ranking.request_tokens,
        "templates": templates,
        "ranking": entries,
    });
    Ok(serde_json::to_string_pretty(&out)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mailweave_engine::parse_corpus;

    #[test]
    fn json_output_is_limited_and_ordered() {
        let corpus = parse_corpus("Hi,\nInvoice due.\nBye\n---\nHello,\nLunch?\nCheers");
        let ranking = rank(&corpus, "lunch");
        let rendered = render_json(&ranking, corpus.len(), 1).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(value["templates"], 2);
        assert_eq!(value["request_tokens"][0], "lunch");
        assert_eq!(value["ranking"].as_array().unwrap().len(), 1);
        assert_eq!(value["ranking"][0]["index"], 1);
        assert_eq!(value["ranking"][0]["greeting"], "Hello,");
    }
}
