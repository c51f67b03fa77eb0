use common::error::{AppError, Res};
use sqlx::PgPool;
use uuid::Uuid;

use db::{
    generation::GenerationCreateRequest,
    models::project::{Project, ProjectWithGenerations},
    project::ProjectCreateRequest,
};

use crate::dtos::projects::{SaveToProjectRequest, SaveToProjectResponse};

pub async fn list_projects(pool: &PgPool, user_id: Uuid) -> Res<Vec<ProjectWithGenerations>> {
    db::project::list_projects_with_generations(pool, user_id).await
}

/// A brand-new project needs a display name and the photo it started from.
fn validate_new_project(name: Option<&str>, original_image: Option<&str>) -> Res<(String, String)> {
    let name = name
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .ok_or_else(|| AppError::BadRequest("A new project needs a name.".to_string()))?;
    let original_image = original_image
        .filter(|i| !i.is_empty())
        .ok_or_else(|| {
            AppError::BadRequest("A new project needs its original image.".to_string())
        })?;
    Ok((name.to_string(), original_image.to_string()))
}

/// Saves a generation, creating the project first when no target is given.
/// Appending to someone else's project reads as "not found" on purpose.
pub async fn save_to_project(
    pool: &PgPool,
    user_id: Uuid,
    req: SaveToProjectRequest,
) -> Res<SaveToProjectResponse> {
    if req.generated_image.is_empty() {
        return Err(AppError::BadRequest(
            "There is no generated image to save.".to_string(),
        ));
    }

    let project: Project = match req.project_id {
        Some(project_id) => db::project::get_owned_project(pool, project_id, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Project not found.".to_string()))?,
        None => {
            let (name, original_image) =
                validate_new_project(req.name.as_deref(), req.original_image.as_deref())?;
            db::project::insert_project(
                pool,
                ProjectCreateRequest {
                    user_id,
                    name,
                    original_image,
                },
            )
            .await?
        }
    };

    let generation = db::generation::insert_generation(
        pool,
        GenerationCreateRequest {
            project_id: project.id,
            generated_image: req.generated_image,
            prompt: req.prompt,
        },
    )
    .await?;

    Ok(SaveToProjectResponse {
        project,
        generation,
    })
}

pub async fn delete_project(pool: &PgPool, project_id: Uuid, user_id: Uuid) -> Res<()> {
    let removed = db::project::delete_project(pool, project_id, user_id).await?;
    if removed == 0 {
        return Err(AppError::NotFound("Project not found.".to_string()));
    }
    Ok(())
}

pub async fn delete_generation(
    pool: &PgPool,
    project_id: Uuid,
    generation_id: Uuid,
    user_id: Uuid,
) -> Res<()> {
    let removed = db::generation::delete_generation(pool, project_id, generation_id, user_id).await?;
    if removed == 0 {
        return Err(AppError::NotFound("Generation not found.".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_project_requires_a_non_empty_name() {
        assert!(validate_new_project(None, Some("data:image/png;base64,x")).is_err());
        assert!(validate_new_project(Some(""), Some("data:image/png;base64,x")).is_err());
        assert!(validate_new_project(Some("   "), Some("data:image/png;base64,x")).is_err());
    }

    #[test]
    fn new_project_requires_the_original_image() {
        assert!(validate_new_project(Some("Living room"), None).is_err());
        assert!(validate_new_project(Some("Living room"), Some("")).is_err());
    }

    #[test]
    fn valid_input_is_trimmed_and_kept() {
        let (name, image) =
            validate_new_project(Some("  Living room "), Some("data:image/png;base64,x")).unwrap();
        assert_eq!(name, "Living room");
        assert_eq!(image, "data:image/png;base64,x");
    }
}
