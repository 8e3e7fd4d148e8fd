mod config;
mod dashboard;
mod errors;
mod jobs;
mod llm_client;
mod matching;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::jobs::client::JobBoardClient;
use crate::jobs::models::SUPPORTED_COUNTRIES;
use crate::llm_client::LlmClient;
use crate::matching::matcher::LlmJobMatcher;
use crate::matching::prompts::MATCH_MODEL;
use crate::routes::{build_router, cors_layer};
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    init_tracing(&config);

    info!(
        "Starting SmartJob API v{} ({})",
        env!("CARGO_PKG_VERSION"),
        if config.is_dev { "development" } else { "production" }
    );

    // Initialize LLM client
    let llm = LlmClient::new(&config.llm)?;
    info!("LLM client initialized (model: {MATCH_MODEL})");

    // Initialize job board client
    let job_board = JobBoardClient::new(&config.job_board)?;
    info!(
        "Job board client initialized (supported countries: {:?})",
        SUPPORTED_COUNTRIES
    );

    // Build app state
    let state = AppState {
        config: config.clone(),
        job_board,
        matcher: Arc::new(LlmJobMatcher::new(llm)),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.cors_origins)?);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Structured logging: `RUST_LOG` wins, otherwise the configured level for this crate.
/// Dev mode uses the multi-line pretty formatter.
fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{}={},tower_http={}",
            env!("CARGO_PKG_NAME"),
            &config.rust_log,
            &config.rust_log
        ))
    });

    let registry = tracing_subscriber::registry().with(filter);
    if config.is_dev {
        registry.with(tracing_subscriber::fmt::layer().pretty()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer().compact()).init();
    }
}
