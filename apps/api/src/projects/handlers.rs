//! Axum route handlers for the project catalog (admin CMS).

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use jd_match::Project;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::project::ProjectRecord;
use crate::state::AppState;

/// GET /api/v1/projects
pub async fn handle_list_projects(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProjectRecord>>, AppError> {
    Ok(Json(state.store.list().await?))
}

/// POST /api/v1/projects
pub async fn handle_create_project(
    State(state): State<AppState>,
    Json(project): Json<Project>,
) -> Result<(StatusCode, Json<ProjectRecord>), AppError> {
    validate_project(&project)?;
    let record = state.store.create(project).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// GET /api/v1/projects/:id
pub async fn handle_get_project(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ProjectRecord>, AppError> {
    Ok(Json(state.store.get(id).await?))
}

/// PUT /api/v1/projects/:id
pub async fn handle_update_project(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(project): Json<Project>,
) -> Result<Json<ProjectRecord>, AppError> {
    validate_project(&project)?;
    Ok(Json(state.store.update(id, project).await?))
}

/// DELETE /api/v1/projects/:id
pub async fn handle_delete_project(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.store.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

fn validate_project(project: &Project) -> Result<(), AppError> {
    if project.name.trim().is_empty() {
        return Err(AppError::Validation("name cannot be empty".to_string()));
    }
    if project.keywords.iter().any(|k| k.trim().is_empty()) {
        return Err(AppError::Validation("keywords cannot contain blank entries".to_string()));
    }
    Ok(())
}
