use async_trait::async_trait;
use chrono::{DateTime, Utc};
use jd_match::Project;
use sqlx::{FromRow, PgPool};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::project::ProjectRecord;
use crate::store::{not_found, ProjectStore};

const SELECT_COLUMNS: &str =
    "id, name, role, situation, task, action, result, keywords, created_at, updated_at";

#[derive(Debug, FromRow)]
struct ProjectRow {
    id: Uuid,
    name: String,
    role: String,
    situation: String,
    task: String,
    action: String,
    result: String,
    keywords: Vec<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<ProjectRow> for ProjectRecord {
    fn from(row: ProjectRow) -> Self {
        ProjectRecord {
            id: row.id,
            project: Project {
                name: row.name,
                role: row.role,
                situation: row.situation,
                task: row.task,
                action: row.action,
                result: row.result,
                keywords: row.keywords,
            },
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Cloud store backed by the `projects` table.
pub struct PgProjectStore {
    pool: PgPool,
}

impl PgProjectStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProjectStore for PgProjectStore {
    async fn list(&self) -> Result<Vec<ProjectRecord>, AppError> {
        let rows = sqlx::query_as::<_, ProjectRow>(&format!(
            "SELECT {SELECT_COLUMNS} FROM projects ORDER BY created_at, id"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ProjectRecord::from).collect())
    }

    async fn get(&self, id: Uuid) -> Result<ProjectRecord, AppError> {
        sqlx::query_as::<_, ProjectRow>(&format!(
            "SELECT {SELECT_COLUMNS} FROM projects WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .map(ProjectRecord::from)
        .ok_or_else(|| not_found(id))
    }

    async fn create(&self, project: Project) -> Result<ProjectRecord, AppError> {
        let record = ProjectRecord::new(project);

        sqlx::query(
            r#"
            INSERT INTO projects
                (id, name, role, situation, task, action, result, keywords, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(record.id)
        .bind(&record.project.name)
        .bind(&record.project.role)
        .bind(&record.project.situation)
        .bind(&record.project.task)
        .bind(&record.project.action)
        .bind(&record.project.result)
        .bind(&record.project.keywords)
        .bind(record.created_at)
        .bind(record.updated_at)
        .execute(&self.pool)
        .await?;

        info!("Created project {} ({})", record.id, record.project.name);
        Ok(record)
    }

    async fn update(&self, id: Uuid, project: Project) -> Result<ProjectRecord, AppError> {
        let row = sqlx::query_as::<_, ProjectRow>(&format!(
            r#"
            UPDATE projects
            SET name = $2, role = $3, situation = $4, task = $5, action = $6,
                result = $7, keywords = $8, updated_at = now()
            WHERE id = $1
            RETURNING {SELECT_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&project.name)
        .bind(&project.role)
        .bind(&project.situation)
        .bind(&project.task)
        .bind(&project.action)
        .bind(&project.result)
        .bind(&project.keywords)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| not_found(id))?;

        info!("Updated project {id}");
        Ok(row.into())
    }

    async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(not_found(id));
        }
        info!("Deleted project {id}");
        Ok(())
    }
}
