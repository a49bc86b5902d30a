//! API routes

mod error;

use axum::{
    extract::State,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};

use crate::conversation::{Message, Transcript};
use crate::core::{ChatError, ChatTurnRequest, ChatTurnResponse};
use crate::AppState;

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Debug, Serialize)]
struct ApiInfo {
    message: &'static str,
    version: &'static str,
}

/// Wire shape of `POST /chat`
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    /// Absent and `null` both mean a fresh conversation
    #[serde(default)]
    pub conversation_history: Option<Vec<Message>>,
}

impl From<ChatRequest> for ChatTurnRequest {
    fn from(request: ChatRequest) -> Self {
        Self {
            message: request.message,
            history: Transcript::from(request.conversation_history.unwrap_or_default()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
    pub conversation_history: Transcript,
}

impl From<ChatTurnResponse> for ChatResponse {
    fn from(turn: ChatTurnResponse) -> Self {
        Self {
            response: turn.reply,
            conversation_history: turn.history,
        }
    }
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "healthy" })
}

async fn api_info() -> Json<ApiInfo> {
    Json(ApiInfo {
        message: "Welcome to the chatbot API!",
        version: env!("CARGO_PKG_VERSION"),
    })
}

async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ChatError> {
    let turn = state.chat_engine.handle(request.into()).await?;
    Ok(Json(turn.into()))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/api", get(api_info))
        .route("/chat", post(chat))
}
