//! `mailweave init`: First-time setup.

use mailweave_config::AppConfig;
use mailweave_sources::BUILTIN_CORPUS;

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config_dir = AppConfig::config_dir();
    let config_path = AppConfig::config_path();
    let corpus_path = AppConfig::default_corpus_path();

    println!("✉️  Mailweave — First-Time Setup");
    println!("================================\n");

    if !config_dir.exists() {
        std::fs::create_dir_all(&config_dir)?;
        println!("✅ Created config directory: {}", config_dir.display());
    } else {
        println!("  Config directory exists: {}", config_dir.display());
    }

    if corpus_path.exists() {
        println!("  Corpus already exists: {}", corpus_path.display());
    } else {
        std::fs::write(&corpus_path, BUILTIN_CORPUS)?;
        println!("✅ Wrote editable corpus to: {}", corpus_path.display());
    }

    if config_path.exists() {
        println!("\n⚠️  Config already exists at: {}", config_path.display());
        println!("   Edit it manually or delete and re-run init.\n");
    } else {
        std::fs::write(&config_path, AppConfig::default_toml())?;
        println!("✅ Created config.toml at: {}", config_path.display());
        println!("\n📝 Next steps:");
        println!(
            "   1. Point corpus.source in {} at {} to use your own templates",
            config_path.display(),
            corpus_path.display()
        );
        println!("   2. Run: mailweave compose \"invoice follow up\" --name Ava\n");
    }

    println!("🎉 Setup complete!\n");

    Ok(())
}
