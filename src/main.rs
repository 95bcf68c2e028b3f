// Mindful Chat - Supportive chat backend
// Main entry point

use anyhow::Result;
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use mindful_chat::analysis::AnalysisResult;
use mindful_chat::assistant::ChatReply;
use mindful_chat::config::{load_config, Config};
use mindful_chat::crisis::crisis_resources;
use mindful_chat::errors::config_parse_error;
use mindful_chat::server::ChatServer;
use tracing_subscriber::prelude::*;

#[derive(Parser, Debug)]
#[command(name = "mindful-chat")]
#[command(about = "Supportive chat backend with crisis detection", version)]
struct Args {
    /// Run mode (defaults to `serve`)
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server
    Serve {
        /// Bind address (overrides config, default: 0.0.0.0:5000)
        #[arg(long)]
        bind: Option<String>,
    },
    /// Analyze a single message and print the reply as JSON
    Analyze {
        /// Message text
        message: String,
        /// Seed the random generator for a repeatable reply
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print crisis resources as JSON
    Resources,
}

/// Output of the `analyze` command
#[derive(Debug, Serialize)]
struct AnalyzeOutput {
    analysis: AnalysisResult,
    reply: ChatReply,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = load_config().map_err(|e| anyhow::anyhow!(config_parse_error(&format!("{:#}", e))))?;

    init_tracing(config.debug_logging);

    match args.command {
        Some(Command::Serve { bind }) => run_server(config, bind).await,
        Some(Command::Analyze { message, seed }) => run_analyze(&config, &message, seed),
        Some(Command::Resources) => {
            println!("{}", serde_json::to_string_pretty(crisis_resources())?);
            Ok(())
        }
        None => run_server(config, None).await,
    }
}

/// Initialize tracing
///
/// Default level is INFO (DEBUG with `debug_logging`); RUST_LOG overrides both.
fn init_tracing(debug_logging: bool) {
    let default_level = if debug_logging { "debug" } else { "info" };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Bridge log crate → tracing (for dependencies using log crate)
    tracing_log::LogTracer::init().ok();
}

async fn run_server(mut config: Config, bind: Option<String>) -> Result<()> {
    if let Some(bind) = bind {
        config.server.bind_address = bind;
    }

    tracing::info!(
        bind_address = %config.server.bind_address,
        cors_origins = config.server.cors_allowed_origins.len(),
        "Starting Mindful Chat"
    );

    let server = ChatServer::new(&config)?;
    server.serve().await
}

fn run_analyze(config: &Config, message: &str, seed: Option<u64>) -> Result<()> {
    let message = message.trim();
    if message.is_empty() {
        anyhow::bail!("Message cannot be empty");
    }

    let server = ChatServer::new(config)?;
    let assistant = server.assistant();

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let analysis = assistant.analyze(message);
    let reply = assistant.respond_to_analysis(message, &analysis, true, &mut rng);

    let output = AnalyzeOutput { analysis, reply };
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
