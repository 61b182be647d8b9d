//! `mailweave compose`: Build an email for a request.

use mailweave_core::error::ComposeError;
use mailweave_core::variables::VariableMap;
use mailweave_engine::{Composer, VariableBuilder};
use tracing::warn;

use super::{load_config, open_source};

pub struct ComposeArgs {
    pub request: String,
    pub name: Option<String>,
    pub vars: Vec<(String, String)>,
    pub top_k: Option<usize>,
    pub corpus: Option<String>,
}

pub async fn run(args: ComposeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(args.corpus)?;

    let mut composer = Composer::from_config(&config);
    if let Some(k) = args.top_k {
        composer = composer.with_top_k(k);
    }

    let overrides: VariableMap = args.vars.into_iter().collect();
    let vars = VariableBuilder::from_config(&config.variables)
        .build_now(args.name.as_deref(), &overrides);

    let email = match open_source(&config) {
        Ok(source) => {
            composer
                .compose_from_source(source.as_ref(), &args.request, &vars)
                .await
        }
        Err(e) => {
            let error = ComposeError::Internal(e.to_string());
            warn!(error = %error, locator = %config.corpus.source, "Could not open corpus source");
            error.fallback_message().to_string()
        }
    };

    println!("{email}");
    Ok(())
}
