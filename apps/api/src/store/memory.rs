use async_trait::async_trait;
use chrono::Utc;
use jd_match::Project;
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::project::ProjectRecord;
use crate::store::{not_found, ProjectStore};

/// Local fallback store. Data lives for the life of the process.
#[derive(Default)]
pub struct MemoryProjectStore {
    records: RwLock<Vec<ProjectRecord>>,
}

impl MemoryProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populates the store, keeping the given order.
    #[cfg(test)]
    pub fn with_projects(projects: impl IntoIterator<Item = Project>) -> Self {
        Self {
            records: RwLock::new(projects.into_iter().map(ProjectRecord::new).collect()),
        }
    }
}

#[async_trait]
impl ProjectStore for MemoryProjectStore {
    async fn list(&self) -> Result<Vec<ProjectRecord>, AppError> {
        Ok(self.records.read().await.clone())
    }

    async fn get(&self, id: Uuid) -> Result<ProjectRecord, AppError> {
        self.records
            .read()
            .await
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    async fn create(&self, project: Project) -> Result<ProjectRecord, AppError> {
        let record = ProjectRecord::new(project);
        self.records.write().await.push(record.clone());
        info!("Created project {} ({})", record.id, record.project.name);
        Ok(record)
    }

    async fn update(&self, id: Uuid, project: Project) -> Result<ProjectRecord, AppError> {
        let mut records = self.records.write().await;
        let record = records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| not_found(id))?;
        record.project = project;
        record.updated_at = Utc::now();
        info!("Updated project {id}");
        Ok(record.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|r| r.id != id);
        if records.len() == before {
            return Err(not_found(id));
        }
        info!("Deleted project {id}");
        Ok(())
    }
}
