//! Project catalog persistence.
//!
//! `AppState` holds an `Arc<dyn ProjectStore>`: Postgres when `DATABASE_URL`
//! is set, the in-memory store otherwise. Both list in creation order, which
//! is the order ranking ties fall back to.

use async_trait::async_trait;
use jd_match::Project;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::project::ProjectRecord;

pub mod memory;
pub mod postgres;

pub use memory::MemoryProjectStore;
pub use postgres::PgProjectStore;

#[async_trait]
pub trait ProjectStore: Send + Sync {
    /// All projects, oldest first.
    async fn list(&self) -> Result<Vec<ProjectRecord>, AppError>;

    async fn get(&self, id: Uuid) -> Result<ProjectRecord, AppError>;

    async fn create(&self, project: Project) -> Result<ProjectRecord, AppError>;

    /// Replaces the project fields; keeps `id` and `created_at`.
    async fn update(&self, id: Uuid, project: Project) -> Result<ProjectRecord, AppError>;

    async fn delete(&self, id: Uuid) -> Result<(), AppError>;
}

pub(crate) fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Project {id} not found"))
}
