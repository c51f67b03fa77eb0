use serde::{Deserialize, Serialize};
use uuid::Uuid;

use db::models::{generation::Generation, project::Project};

/// Saves a generated image. With `project_id` the generation is appended to
/// that project; without it a new project is created and `name` is required.
#[derive(Debug, Deserialize)]
pub struct SaveToProjectRequest {
    pub project_id: Option<Uuid>,
    pub name: Option<String>,
    pub original_image: Option<String>,
    pub generated_image: String,
    #[serde(default)]
    pub prompt: String,
}

#[derive(Debug, Serialize)]
pub struct SaveToProjectResponse {
    pub project: Project,
    pub generation: Generation,
}
