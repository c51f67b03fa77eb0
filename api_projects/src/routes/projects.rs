use std::sync::Arc;

use actix_web::{HttpResponse, Responder, delete, get, post, web};
use common::{error::Res, http::Success, jwt::JwtClaims};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{dtos::projects::SaveToProjectRequest, services};

#[get("")]
async fn get_projects(
    claims: web::ReqData<JwtClaims>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let projects = services::projects::list_projects(pg_pool, claims.user_id).await?;
    Success::ok(projects)
}

#[post("/save")]
async fn post_save(
    claims: web::ReqData<JwtClaims>,
    pool: web::Data<Arc<PgPool>>,
    req: web::Json<SaveToProjectRequest>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let saved =
        services::projects::save_to_project(pg_pool, claims.user_id, req.into_inner()).await?;
    Success::created(saved)
}

#[delete("/{project_id}")]
async fn delete_project(
    claims: web::ReqData<JwtClaims>,
    pool: web::Data<Arc<PgPool>>,
    path: web::Path<Uuid>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    services::projects::delete_project(pg_pool, path.into_inner(), claims.user_id).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[delete("/{project_id}/generations/{generation_id}")]
async fn delete_generation(
    claims: web::ReqData<JwtClaims>,
    pool: web::Data<Arc<PgPool>>,
    path: web::Path<(Uuid, Uuid)>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let (project_id, generation_id) = path.into_inner();
    services::projects::delete_generation(pg_pool, project_id, generation_id, claims.user_id)
        .await?;
    Ok(HttpResponse::NoContent().finish())
}
