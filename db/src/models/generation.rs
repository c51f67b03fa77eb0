use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Generation {
    pub id: Uuid,
    pub project_id: Uuid,
    pub generated_image: String,
    pub prompt: String,
    pub created_at: NaiveDateTime,
}
