//! Axum route handlers for the AI features.

use axum::{extract::State, Json};

use crate::assistant::tailor::{tailor_resume, TailorRequest, TailorResponse};
use crate::assistant::twin::{ask_twin, TwinRequest, TwinResponse};
use crate::errors::AppError;
use crate::state::AppState;

/// POST /api/v1/resumes/tailor
///
/// Ranks the catalog against the JD and returns a tailored project section.
pub async fn handle_tailor_resume(
    State(state): State<AppState>,
    Json(request): Json<TailorRequest>,
) -> Result<Json<TailorResponse>, AppError> {
    let generator = state.generator()?;
    let records = state.store.list().await?;
    let response = tailor_resume(&state.matcher, generator, &records, &request).await?;
    Ok(Json(response))
}

/// POST /api/v1/twin/chat
pub async fn handle_twin_chat(
    State(state): State<AppState>,
    Json(request): Json<TwinRequest>,
) -> Result<Json<TwinResponse>, AppError> {
    let generator = state.generator()?;
    let records = state.store.list().await?;
    let response = ask_twin(generator, &state.owner_name, &records, &request).await?;
    Ok(Json(response))
}
