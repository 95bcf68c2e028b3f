// Mindful Chat - HTTP Server Module
// Thin transport shell around the support assistant

mod handlers;

pub use handlers::{create_router, health_check, ChatRequest, CopingStrategiesResponse, HealthStatus};

use anyhow::{Context, Result};
use axum::http::{HeaderValue, Method};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::analysis::{Clock, MessageAnalyzer, SystemClock};
use crate::assistant::{ChatReply, SupportAssistant};
use crate::config::{Config, ServerConfig};
use crate::crisis::CrisisDetector;
use crate::errors::{bind_failed_error, keywords_file_error};
use crate::responses::ResponseGenerator;

/// Main chat server structure
///
/// Holds only immutable data, so it is shared across requests behind an
/// `Arc` without any locking.
pub struct ChatServer {
    /// Analysis and response engine
    assistant: SupportAssistant,
    /// Clock for response timestamps outside of analysis
    clock: Arc<dyn Clock>,
    /// CORS policy built from the configured origins
    cors: CorsLayer,
    /// Server configuration
    config: ServerConfig,
}

impl ChatServer {
    /// Create a server from loaded configuration
    pub fn new(config: &Config) -> Result<Self> {
        let detector = match &config.keywords_path {
            Some(path) => {
                let detector = CrisisDetector::load_from_file(path).map_err(|e| {
                    anyhow::anyhow!(keywords_file_error(&path.display().to_string(), &format!("{:#}", e)))
                })?;
                tracing::info!(
                    path = %path.display(),
                    keywords = detector.keywords().len(),
                    "Loaded crisis keyword table"
                );
                detector
            }
            None => CrisisDetector::default(),
        };

        let clock: Arc<dyn Clock> = Arc::new(SystemClock);
        let assistant = SupportAssistant::new(
            MessageAnalyzer::new(detector, Arc::clone(&clock)),
            ResponseGenerator::new(),
        );

        Self::with_assistant(config.server.clone(), assistant, clock)
    }

    /// Create a server around an existing assistant and clock
    pub fn with_assistant(
        config: ServerConfig,
        assistant: SupportAssistant,
        clock: Arc<dyn Clock>,
    ) -> Result<Self> {
        let cors = cors_layer(&config.cors_allowed_origins)?;

        Ok(Self {
            assistant,
            clock,
            cors,
            config,
        })
    }

    /// Start the HTTP server and run until Ctrl-C
    pub async fn serve(self) -> Result<()> {
        let addr: SocketAddr = self
            .config
            .bind_address
            .parse()
            .with_context(|| format!("Invalid bind address: {}", self.config.bind_address))?;

        let app = create_router(Arc::new(self));

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .with_context(|| bind_failed_error(&addr.to_string()))?;

        tracing::info!("Starting Mindful Chat server on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server stopped");
        Ok(())
    }

    /// Analyze a message and build its reply with the thread-local generator
    pub fn reply(&self, message: &str, with_follow_up_questions: bool) -> ChatReply {
        let mut rng = rand::thread_rng();
        self.assistant
            .respond(message, with_follow_up_questions, &mut rng)
    }

    /// Get reference to the assistant
    pub fn assistant(&self) -> &SupportAssistant {
        &self.assistant
    }

    /// Get reference to the clock
    pub fn clock(&self) -> &Arc<dyn Clock> {
        &self.clock
    }

    pub(crate) fn cors(&self) -> &CorsLayer {
        &self.cors
    }
}

/// Any origin when the list is empty, otherwise exactly the listed origins
fn cors_layer(origins: &[String]) -> Result<CorsLayer> {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    if origins.is_empty() {
        return Ok(layer.allow_origin(Any));
    }

    let allowed = origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin)
                .with_context(|| format!("Invalid CORS origin: {}", origin))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(layer.allow_origin(allowed))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
