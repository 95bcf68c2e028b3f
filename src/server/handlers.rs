// HTTP request handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

use super::ChatServer;
use crate::analysis::format_timestamp;
use crate::assistant::ChatReply;
use crate::crisis::{crisis_resources, CrisisResources};
use crate::errors::{ChatError, TROUBLE_PROCESSING_MESSAGE, TRY_AGAIN_MESSAGE};
use crate::responses::COPING_STRATEGIES;

const INDEX_HTML: &str = include_str!("../../static/index.html");

/// Create the main application router
pub fn create_router(server: Arc<ChatServer>) -> Router {
    let cors = server.cors().clone();

    Router::new()
        .route("/", get(index))
        .route("/api/chat", post(handle_chat))
        .route("/api/health", get(health_check))
        .route("/api/crisis-resources", get(get_crisis_resources))
        .route("/api/coping-strategies", get(get_coping_strategies))
        .fallback(not_found)
        .with_state(server)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Request body for /api/chat
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
    /// Also return sampled follow-up questions
    #[serde(default)]
    pub follow_up_questions: bool,
}

/// Handle GET / - Chat page
async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Handle POST /api/chat - Main chat endpoint
async fn handle_chat(
    State(server): State<Arc<ChatServer>>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatReply>, ChatError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Rejected chat body");
        ChatError::MissingMessage
    })?;

    let message = request
        .message
        .as_deref()
        .map(str::trim)
        .ok_or(ChatError::MissingMessage)?;

    if message.is_empty() {
        return Err(ChatError::EmptyMessage);
    }

    // Message text is never logged
    tracing::info!(length = message.chars().count(), "Received message");

    Ok(Json(server.reply(message, request.follow_up_questions)))
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub timestamp: String,
    pub version: String,
}

/// Handle GET /api/health - Health check endpoint
pub async fn health_check(State(server): State<Arc<ChatServer>>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy".to_string(),
        timestamp: format_timestamp(server.clock().now()),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Handle GET /api/crisis-resources - Emergency contacts
async fn get_crisis_resources() -> Json<&'static CrisisResources> {
    Json(crisis_resources())
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CopingStrategiesResponse {
    pub strategies: Vec<String>,
    pub timestamp: String,
}

/// Handle GET /api/coping-strategies
async fn get_coping_strategies(
    State(server): State<Arc<ChatServer>>,
) -> Json<CopingStrategiesResponse> {
    Json(CopingStrategiesResponse {
        strategies: COPING_STRATEGIES.iter().map(|s| s.to_string()).collect(),
        timestamp: format_timestamp(server.clock().now()),
    })
}

async fn not_found() -> ChatError {
    ChatError::NotFound
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");

    ChatError::Internal(anyhow::anyhow!("handler panicked: {}", detail)).into_response()
}

impl IntoResponse for ChatError {
    fn into_response(self) -> Response {
        match self {
            ChatError::MissingMessage | ChatError::EmptyMessage => {
                let body = serde_json::json!({ "error": self.to_string() });
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
            ChatError::NotFound => {
                let body = serde_json::json!({ "error": self.to_string() });
                (StatusCode::NOT_FOUND, Json(body)).into_response()
            }
            ChatError::Internal(e) => {
                tracing::error!(error = %e, "Error processing chat message");

                let body = serde_json::json!({
                    "error": TROUBLE_PROCESSING_MESSAGE,
                    "message": TRY_AGAIN_MESSAGE,
                });
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
        }
    }
}
