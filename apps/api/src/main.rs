mod assistant;
mod config;
mod db;
mod errors;
mod llm_client;
mod matching;
mod models;
mod projects;
mod routes;
mod state;
mod store;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use jd_match::JdMatcher;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::llm_client::{LlmClient, TextGenerator};
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::{MemoryProjectStore, PgProjectStore, ProjectStore};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("portfolio_api={0},jd_match={0}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Portfolio API v{}", env!("CARGO_PKG_VERSION"));

    // Vocabulary is fixed for the life of the process
    let vocabulary = config.load_vocabulary()?;
    info!(
        "Vocabulary loaded: {} keywords, {} positions ({})",
        vocabulary.keywords().len(),
        vocabulary.positions().len(),
        config
            .vocabulary_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "builtin".to_string())
    );
    let matcher = Arc::new(JdMatcher::new(vocabulary));

    // Project store: Postgres when configured, in-memory otherwise
    let store: Arc<dyn ProjectStore> = match &config.database_url {
        Some(url) => Arc::new(PgProjectStore::new(create_pool(url).await?)),
        None => {
            warn!("DATABASE_URL not set: using in-memory project store");
            Arc::new(MemoryProjectStore::new())
        }
    };

    // Text generator for the AI features
    let generator: Option<Arc<dyn TextGenerator>> = match &config.anthropic_api_key {
        Some(key) => {
            let llm = LlmClient::new(key.clone()).context("Failed to build LLM client")?;
            info!("LLM client initialized (model: {})", llm_client::MODEL);
            Some(Arc::new(llm) as Arc<dyn TextGenerator>)
        }
        None => {
            warn!("ANTHROPIC_API_KEY not set: AI features disabled");
            None
        }
    };

    let state = AppState {
        store,
        matcher,
        generator,
        owner_name: config.owner_name.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
