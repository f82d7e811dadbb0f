use std::sync::Arc;

use jd_match::JdMatcher;

use crate::errors::AppError;
use crate::llm_client::TextGenerator;
use crate::store::ProjectStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Postgres-backed when `DATABASE_URL` is set, in-memory otherwise.
    pub store: Arc<dyn ProjectStore>,
    /// Vocabulary and weights, fixed for the life of the process.
    pub matcher: Arc<JdMatcher>,
    /// `None` when `ANTHROPIC_API_KEY` is not configured.
    pub generator: Option<Arc<dyn TextGenerator>>,
    pub owner_name: String,
}

impl AppState {
    pub fn generator(&self) -> Result<&dyn TextGenerator, AppError> {
        self.generator.as_deref().ok_or_else(|| {
            AppError::ServiceUnavailable(
                "AI features are disabled: ANTHROPIC_API_KEY is not set".to_string(),
            )
        })
    }
}
