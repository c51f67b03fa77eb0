use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::generation::Generation;

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub original_image: String,
    pub created_at: NaiveDateTime,
}

/// A project together with its generations, newest project first when listed.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectWithGenerations {
    #[serde(flatten)]
    pub project: Project,
    pub generations: Vec<Generation>,
}
