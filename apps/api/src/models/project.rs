use chrono::{DateTime, Utc};
use jd_match::Project;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored portfolio project: the matcher's `Project` plus identity and timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub id: Uuid,
    #[serde(flatten)]
    pub project: Project,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProjectRecord {
    pub fn new(project: Project) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            project,
            created_at: now,
            updated_at: now,
        }
    }
}

impl AsRef<Project> for ProjectRecord {
    fn as_ref(&self) -> &Project {
        &self.project
    }
}
