//! `mailweave config`: Configuration management commands.

use mailweave_config::AppConfig;

pub async fn validate() -> Result<(), Box<dyn std::error::Error>> {
    println!("🔍 Validating configuration...");

    match AppConfig::load() {
        Ok(config) => {
            println!("   ✅ Config parsed successfully");

            let mut warnings = Vec::new();

            if let Err(e) = super::open_source(&config) {
                warnings.push(format!("Corpus source is unusable: {e}"));
            }

            if config.selection.top_k > 10 {
                warnings.push(format!(
                    "selection.top_k = {} is larger than the gateway accepts (10)",
                    config.selection.top_k
                ));
            }

            if config.variables.sender.trim().is_empty() {
                warnings.push("variables.sender is empty; {your_name} will be blank".into());
            }

            if warnings.is_empty() {
                println!("   ✅ All checks passed");
            } else {
                println!();
                for w in &warnings {
                    println!("   ⚠️  {w}");
                }
            }

            println!();
            println!("   Corpus:    {}", config.corpus.source);
            println!("   Timeout:   {}s", config.corpus.timeout_secs);
            println!("   Top K:     {}", config.selection.top_k);
            println!("   Sender:    {}", config.variables.sender);
            println!(
                "   Gateway:   {}:{}",
                config.gateway.host, config.gateway.port
            );
        }
        Err(e) => {
            println!("   ❌ Config error: {e}");
            return Err(e.into());
        }
    }

    Ok(())
}

pub async fn show() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;
    let toml_str = toml::to_string_pretty(&config)?;
    println!("{toml_str}");
    Ok(())
}

pub async fn path() -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", AppConfig::config_path().display());
    Ok(())
}
