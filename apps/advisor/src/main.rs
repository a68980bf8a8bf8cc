mod config;
mod corpus;
mod errors;
mod llm_client;
mod models;
mod recommendation;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::corpus::{CourseCorpus, PdfCourseDocument};
use crate::llm_client::{LlmClient, TextGenerator};
use crate::recommendation::requester::load_corpus;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Course Advisor v{}", env!("CARGO_PKG_VERSION"));

    // The only LLM client for the lifetime of the process
    let llm = LlmClient::new(
        config.openai_api_key.clone(),
        &config.openai_base_url,
        &config.openai_model,
    )?;
    info!("LLM client initialized (model: {})", llm.model());
    if config.openai_api_key.is_none() {
        tracing::warn!("OPENAI_API_KEY is not set; recommendations will fail until it is");
    }

    // Course data is required: refuse to start without it
    let corpus = Arc::new(CourseCorpus::new(PdfCourseDocument::new(&config.courses_pdf)));
    let course_text = load_corpus(corpus.clone()).await?;
    info!(
        "Course corpus loaded from {} ({} chars)",
        config.courses_pdf,
        course_text.chars().count()
    );

    let state = AppState {
        llm: Arc::new(llm),
        corpus,
    };

    let app = build_router(state).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
