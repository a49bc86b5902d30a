//! Chatbot API
//!
//! A stateless chat relay: each `POST /chat` forwards the user's message and
//! the client-held transcript to an OpenAI-compatible completion provider and
//! returns the reply with the transcript extended by one exchange.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod conversation;
mod core;
mod providers;
mod routes;

use crate::config::Config;
use crate::core::ChatEngine;
use crate::providers::{CompletionProvider, OpenAICompatConfig, OpenAICompatProvider};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub chat_engine: Arc<ChatEngine>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chatbot_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    let provider = build_provider(&config)?;
    let chat_engine = Arc::new(ChatEngine::new(provider, config.completion.clone()));

    let state = AppState { chat_engine };

    let app = Router::new()
        .merge(routes::router())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    tracing::info!("Chatbot API running at http://{} (model {})", addr, config.completion.model);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the completion provider once at startup. Without a credential the
/// service still starts, but every chat turn is refused.
fn build_provider(config: &Config) -> anyhow::Result<Option<Arc<dyn CompletionProvider>>> {
    let Some(api_key) = config.openai_api_key.clone() else {
        tracing::warn!("OPENAI_API_KEY not set; /chat will respond with 503 until it is configured");
        return Ok(None);
    };

    let provider_config = OpenAICompatConfig::openai(api_key)
        .with_base_url(config.openai_base_url.clone())
        .with_timeout_secs(config.completion.request_timeout_secs);
    let provider: Arc<dyn CompletionProvider> = Arc::new(OpenAICompatProvider::new(provider_config)?);

    Ok(Some(provider))
}
