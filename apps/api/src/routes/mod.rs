pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::assistant::handlers as assistant;
use crate::matching::handlers as matching;
use crate::projects::handlers as projects;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Project catalog (admin CMS)
        .route(
            "/api/v1/projects",
            get(projects::handle_list_projects).post(projects::handle_create_project),
        )
        .route(
            "/api/v1/projects/:id",
            get(projects::handle_get_project)
                .put(projects::handle_update_project)
                .delete(projects::handle_delete_project),
        )
        // JD matching
        .route("/api/v1/jd/parse", post(matching::handle_parse_jd))
        .route("/api/v1/projects/rank", post(matching::handle_rank_projects))
        .route(
            "/api/v1/projects/:id/matched-keywords",
            post(matching::handle_matched_keywords),
        )
        // AI features
        .route("/api/v1/resumes/tailor", post(assistant::handle_tailor_resume))
        .route("/api/v1/twin/chat", post(assistant::handle_twin_chat))
        .with_state(state)
}
