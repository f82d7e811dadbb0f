//! Axum route handlers for JD matching.
//!
//! None of these reject an empty JD: an empty JD parses to nothing and ranks
//! the catalog in its stored order.

use axum::{
    extract::{Path, State},
    Json,
};
use jd_match::ParsedJd;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::matching::{rank_catalog, RankedProject};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct JdRequest {
    #[serde(default)]
    pub jd_text: String,
}

#[derive(Debug, Serialize)]
pub struct RankResponse {
    pub parsed_jd: ParsedJd,
    pub projects: Vec<RankedProject>,
}

#[derive(Debug, Serialize)]
pub struct MatchedKeywordsResponse {
    pub project_id: Uuid,
    pub keywords: Vec<String>,
}

/// POST /api/v1/jd/parse
pub async fn handle_parse_jd(
    State(state): State<AppState>,
    Json(request): Json<JdRequest>,
) -> Json<ParsedJd> {
    Json(state.matcher.parse(&request.jd_text))
}

/// POST /api/v1/projects/rank
pub async fn handle_rank_projects(
    State(state): State<AppState>,
    Json(request): Json<JdRequest>,
) -> Result<Json<RankResponse>, AppError> {
    let records = state.store.list().await?;
    let (parsed_jd, projects) = rank_catalog(&state.matcher, &records, &request.jd_text);

    info!(
        "Ranked {} projects against JD ({} keywords, {} positions)",
        projects.len(),
        parsed_jd.keywords.len(),
        parsed_jd.positions.len()
    );

    Ok(Json(RankResponse {
        parsed_jd,
        projects,
    }))
}

/// POST /api/v1/projects/:id/matched-keywords
pub async fn handle_matched_keywords(
    State(state): State<AppState>,
    Path(project_id): Path<Uuid>,
    Json(request): Json<JdRequest>,
) -> Result<Json<MatchedKeywordsResponse>, AppError> {
    let record = state.store.get(project_id).await?;
    let keywords = state
        .matcher
        .matched_keywords(&record.project, &request.jd_text);

    Ok(Json(MatchedKeywordsResponse {
        project_id,
        keywords,
    }))
}
