use common::error::{AppError, Res};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{
    generation::Generation,
    project::{Project, ProjectWithGenerations},
};

pub struct ProjectCreateRequest {
    pub user_id: Uuid,
    pub name: String,
    pub original_image: String,
}

/// Fetches all of a user's projects newest-first, with their generations
/// attached. One round trip per collection, grouped in memory.
pub async fn list_projects_with_generations(
    pool: &PgPool,
    user_id: Uuid,
) -> Res<Vec<ProjectWithGenerations>> {
    let projects = sqlx::query_as::<_, Project>(
        "SELECT * FROM projects WHERE user_id = $1 ORDER BY created_at DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    let ids: Vec<Uuid> = projects.iter().map(|p| p.id).collect();
    let generations = sqlx::query_as::<_, Generation>(
        "SELECT * FROM generations WHERE project_id = ANY($1) ORDER BY created_at",
    )
    .bind(&ids)
    .fetch_all(pool)
    .await?;

    let mut result: Vec<ProjectWithGenerations> = projects
        .into_iter()
        .map(|project| ProjectWithGenerations {
            project,
            generations: Vec::new(),
        })
        .collect();
    for generation in generations {
        if let Some(entry) = result
            .iter_mut()
            .find(|p| p.project.id == generation.project_id)
        {
            entry.generations.push(generation);
        }
    }

    Ok(result)
}

pub async fn insert_project(pool: &PgPool, data: ProjectCreateRequest) -> Res<Project> {
    sqlx::query_as::<_, Project>(
        r#"
        INSERT INTO projects (user_id, name, original_image)
        VALUES ($1, $2, $3)
        RETURNING *
        "#,
    )
    .bind(data.user_id)
    .bind(data.name)
    .bind(data.original_image)
    .fetch_one(pool)
    .await
    .map_err(AppError::from)
}

/// Fetches a project only when it belongs to `user_id`.
pub async fn get_owned_project(
    pool: &PgPool,
    project_id: Uuid,
    user_id: Uuid,
) -> Res<Option<Project>> {
    sqlx::query_as::<_, Project>("SELECT * FROM projects WHERE id = $1 AND user_id = $2")
        .bind(project_id)
        .bind(user_id)
        .fetch_optional(pool)
        .await
        .map_err(AppError::from)
}

/// Deletes a project scoped by ownership. Generations go with it via the
/// FK cascade. Returns the number of rows removed (0 when not owned).
pub async fn delete_project(pool: &PgPool, project_id: Uuid, user_id: Uuid) -> Res<u64> {
    sqlx::query("DELETE FROM projects WHERE id = $1 AND user_id = $2")
        .bind(project_id)
        .bind(user_id)
        .execute(pool)
        .await
        .map(|done| done.rows_affected())
        .map_err(AppError::from)
}
