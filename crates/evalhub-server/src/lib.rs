//! HTTP surface of EvalHub.
//!
//! Two flows share the session store: `generate-responses` asks the provider
//! for up to three completions at increasing temperature and remembers them
//! under a fresh `chat_id`; `feedback` looks the `chat_id` up, merges the
//! vote with the stored prompt and responses, and writes one evaluation
//! document. `stats` and `health` read the evaluation store directly.
//!
//! # Running
//!
//! ```sh
//! GEMINI_API_KEY=... MONGODB_URL=mongodb://localhost:27017 evalhub
//! evalhub --memory --port 8080
//! ```
//!
//! See [`evalhub_core::config`] for every setting.

use std::{path::PathBuf, sync::Arc};

use axum::{
    Router,
    routing::{get, post},
};
use clap::Parser;
use tokio::{net::TcpListener, signal::ctrl_c};
#[cfg(unix)]
use tokio::signal::unix::{SignalKind, signal};
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

use evalhub_core::config::StorageBackend;
use evalhub_infrastructure::ConfigService;
use routes::{
    feedback_handler, generate_responses_handler, health_handler, root_handler, stats_handler,
};
use state::State;

#[derive(Parser, Debug)]
#[command(name = "evalhub", about = "LLM multi-response generation and evaluation API")]
pub struct Cli {
    /// Path to config.toml (defaults to ~/.config/evalhub/config.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Port to listen on, overriding configuration
    #[arg(long)]
    pub port: Option<u16>,

    /// Keep evaluations in memory instead of MongoDB
    #[arg(long)]
    pub memory: bool,
}

pub fn router(state: Arc<State>) -> Router {
    let cors = CorsLayer::permissive();

    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/api/v1/generate-responses", post(generate_responses_handler))
        .route("/generate-responses", post(generate_responses_handler))
        .route("/api/v1/feedback", post(feedback_handler))
        .route("/feedback", post(feedback_handler))
        .route("/api/v1/stats", get(stats_handler))
        .route("/stats", get(stats_handler))
        .layer(cors)
        .with_state(state)
}

pub async fn start_server(cli: Cli) -> anyhow::Result<()> {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut config = ConfigService::new(cli.config)?.load()?;
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if cli.memory {
        config.storage = StorageBackend::Memory;
    }

    info!("Starting up {} v{}...", config.app_name, config.app_version);
    let state = State::new(config).await?;

    let address = state.config.server.address();
    info!("Binding to {address}");
    let listener = TcpListener::bind(&address).await?;
    info!("Server running on {address}");

    axum::serve(listener, router(state.clone()))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutting down {}...", state.config.app_name);
    state.close().await;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
