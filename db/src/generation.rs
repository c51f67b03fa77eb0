use common::error::{AppError, Res};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::generation::Generation;

pub struct GenerationCreateRequest {
    pub project_id: Uuid,
    pub generated_image: String,
    pub prompt: String,
}

pub async fn insert_generation(pool: &PgPool, data: GenerationCreateRequest) -> Res<Generation> {
    sqlx::query_as::<_, Generation>(
        r#"
        INSERT INTO generations (project_id, generated_image, prompt)
        VALUES ($1, $2, $3)
        RETURNING *
        "#,
    )
    .bind(data.project_id)
    .bind(data.generated_image)
    .bind(data.prompt)
    .fetch_one(pool)
    .await
    .map_err(AppError::from)
}

/// Deletes a single generation, scoped through its project's owner so one
/// user cannot remove another user's rows. Returns rows removed.
pub async fn delete_generation(
    pool: &PgPool,
    project_id: Uuid,
    generation_id: Uuid,
    user_id: Uuid,
) -> Res<u64> {
    sqlx::query(
        r#"
        DELETE FROM generations g
        USING projects p
        WHERE g.id = $1
          AND g.project_id = $2
          AND p.id = g.project_id
          AND p.user_id = $3
        "#,
    )
    .bind(generation_id)
    .bind(project_id)
    .bind(user_id)
    .execute(pool)
    .await
    .map(|done| done.rows_affected())
    .map_err(AppError::from)
}
