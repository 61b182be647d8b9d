//! `mailweave doctor`: Diagnose configuration and corpus health.

use mailweave_config::AppConfig;
use mailweave_engine::Composer;

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    println!("🩺 Mailweave Doctor — System Diagnostics");
    println!("========================================\n");

    let mut issues = 0;

    let config_path = AppConfig::config_path();
    let config = if config_path.exists() {
        match AppConfig::load() {
            Ok(config) => {
                println!("  ✅ Config file valid");
                config
            }
            Err(e) => {
                println!("  ❌ Config file invalid: {e}");
                println!("\n  ⚠️  Fix the config before running other checks.");
                return Ok(());
            }
        }
    } else {
        println!("  ⚠️  No config file, using defaults. Run `mailweave init` to create one");
        issues += 1;
        AppConfig::default()
    };

    // Corpus source
    match super::open_source(&config) {
        Ok(source) => {
            println!("  ✅ Corpus source: {} ({})", source.name(), source.locator());
            match Composer::from_config(&config)
                .load_corpus(source.as_ref())
                .await
            {
                Ok(corpus) if corpus.is_empty() => {
                    println!("  ❌ Corpus loaded but contains no templates");
                    issues += 1;
                }
                Ok(corpus) => {
                    println!("  ✅ Corpus loaded: {} template(s)", corpus.len());
                    let short = corpus.iter().filter(|t| t.body.is_empty()).count();
                    if short > 0 {
                        println!("  ⚠️  {short} template(s) have no body line");
                        issues += 1;
                    }
                }
                Err(e) => {
                    println!("  ❌ Corpus unavailable: {e}");
                    issues += 1;
                }
            }
        }
        Err(e) => {
            println!("  ❌ Corpus source invalid: {e}");
            issues += 1;
        }
    }

    // Summary
    println!();
    if issues == 0 {
        println!("  🎉 All checks passed!");
    } else {
        println!("  ⚠️  {issues} issue(s) found. See above for details.");
    }

    Ok(())
}
