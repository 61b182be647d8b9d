//! `mailweave templates`: List the templates in the corpus.

use super::{load_config, load_corpus};

pub async fn run(corpus: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(corpus)?;
    let corpus = load_corpus(&config).await?;

    println!("📚 {} template(s) from {}\n", corpus.len(), config.corpus.source);
    for (index, template) in corpus.iter().enumerate() {
        let body_lines = template.body.lines().count();
        println!("  [{index:>2}] {}", template.greeting);
        println!("       {body_lines} body line(s), closes with: {}", template.closing);
    }

    Ok(())
}
