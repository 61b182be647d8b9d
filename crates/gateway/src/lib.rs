//! HTTP API gateway for Mailweave.
//!
//! Exposes a health check and the v1 API (compose and rank). Every request
//! re-reads the corpus from the configured source; the gateway keeps no
//! state between requests beyond its settings.
//!
//! Built on Axum.

pub mod api_v1;

use axum::{Router, extract::DefaultBodyLimit, response::Json, routing::get};
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

use mailweave_core::source::CorpusSource;
use mailweave_engine::{Composer, VariableBuilder};

/// Largest accepted request body.
const BODY_LIMIT_BYTES: usize = 64 * 1024;

/// Shared, read-only state for the gateway.
pub struct GatewayState {
    pub source: Box<dyn CorpusSource>,
    pub composer: Composer,
    pub variables: VariableBuilder,
}

impl GatewayState {
    pub fn from_config(
        config: &mailweave_config::AppConfig,
    ) -> Result<Self, mailweave_core::SourceError> {
        let timeout = std::time::Duration::from_secs(config.corpus.timeout_secs);
        Ok(Self {
            source: mailweave_sources::source_from_locator(&config.corpus.source, timeout)?,
            composer: Composer::from_config(config),
            variables: VariableBuilder::from_config(&config.variables),
        })
    }
}

pub type SharedState = Arc<GatewayState>;

/// Build the Axum router with all gateway routes.
pub fn build_router(state: SharedState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .nest("/v1", api_v1::v1_router(state))
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .layer(tower_http::trace::TraceLayer::new_for_http())
}

/// Start the gateway HTTP server.
pub async fn start(
    config: mailweave_config::AppConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let addr = format!("{}:{}", config.gateway.host, config.gateway.port);
    let state = Arc::new(GatewayState::from_config(&config)?);

    info!(
        source = state.source.name(),
        locator = %state.source.locator(),
        top_k = state.composer.top_k(),
        "Corpus source configured"
    );

    let app = build_router(state);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(addr = %addr, "Mailweave gateway listening");
    axum::serve(listener, app).await?;
    Ok(())
}

// --- Handlers ---

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use mailweave_sources::BuiltinSource;
    use tower::ServiceExt;

    fn test_state() -> SharedState {
        Arc::new(GatewayState {
            source: Box::new(BuiltinSource),
            composer: Composer::new(),
            variables: VariableBuilder::default(),
        })
    }

    #[tokio::test]
    async fn health_endpoint() {
        let app = build_router(test_state());

        let req = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn oversized_body_rejected() {
        let app = build_router(test_state());
        let request = "x".repeat(BODY_LIMIT_BYTES + 1);
        let body = serde_json::json!({ "request": request }).to_string();

        let req = Request::builder()
            .method("POST")
            .uri("/v1/compose")
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap();

        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[test]
    fn state_from_default_config_uses_builtin_corpus() {
        let state = GatewayState::from_config(&mailweave_config::AppConfig::default()).unwrap();
        assert_eq!(state.source.name(), "builtin");
        assert_eq!(state.composer.top_k(), 3);
    }

    #[test]
    fn state_from_config_rejects_bad_locator() {
        let mut config = mailweave_config::AppConfig::default();
        config.corpus.source = "s3://bucket/corpus.txt".into();
        assert!(GatewayState::from_config(&config).is_err());
    }
}
