//! Mailweave CLI, the main entry point.
//!
//! Commands:
//! - `compose`: Build an email for a request
//! - `rank`: Show how templates score against a request
//! - `templates`: List the templates in the corpus
//! - `config`: Show, locate or validate the configuration
//! - `doctor`: Diagnose setup problems
//! - `init`: Write a default config and an editable corpus
//! - `serve`: Start the HTTP gateway

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "mailweave",
    about = "Mailweave — compose emails from a template corpus",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    log_json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compose an email for a free-text request
    Compose {
        /// What the email should be about
        request: String,

        /// Recipient name (fills {name})
        #[arg(short, long)]
        name: Option<String>,

        /// Placeholder value as KEY=VALUE; repeatable
        #[arg(long = "var", value_name = "KEY=VALUE", value_parser = commands::parse_var)]
        vars: Vec<(String, String)>,

        /// Number of templates to combine
        #[arg(short = 'k', long)]
        top_k: Option<usize>,

        /// Corpus locator: "builtin", a file path or an http(s) URL
        #[arg(short, long)]
        corpus: Option<String>,
    },

    /// Rank every template against a request
    Rank {
        request: String,

        /// Only show the best N
        #[arg(short = 'k', long)]
        top_k: Option<usize>,

        #[arg(short, long)]
        corpus: Option<String>,

        /// Print the ranking as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the templates in the corpus
    Templates {
        #[arg(short, long)]
        corpus: Option<String>,
    },

    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Diagnose configuration and corpus health
    Doctor,

    /// Write a default config and a copy of the built-in corpus
    Init,

    /// Start the HTTP gateway server
    Serve {
        /// Override the port
        #[arg(short, long)]
        port: Option<u16>,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration as TOML
    Show,
    /// Print the config file path
    Path,
    /// Validate the config file
    Validate,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr);
    if cli.log_json {
        builder.json().init();
    } else {
        builder.init();
    }

    match cli.command {
        Commands::Compose {
            request,
            name,
            vars,
            top_k,
            corpus,
        } => {
            commands::compose::run(commands::compose::ComposeArgs {
                request,
                name,
                vars,
                top_k,
                corpus,
            })
            .await?
        }
        Commands::Rank {
            request,
            top_k,
            corpus,
            json,
        } => commands::rank::run(request, top_k, corpus, json).await?,
        Commands::Templates { corpus } => commands::templates::run(corpus).await?,
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config_cmd::show().await?,
            ConfigAction::Path => commands::config_cmd::path().await?,
            ConfigAction::Validate => commands::config_cmd::validate().await?,
        },
        Commands::Doctor => commands::doctor::run().await?,
        Commands::Init => commands::init::run().await?,
        Commands::Serve { port } => commands::serve::run(port).await?,
    }

    Ok(())
}
