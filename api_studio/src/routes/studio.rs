use std::sync::Arc;

use actix_web::{Responder, get, post, web};
use common::{error::Res, http::Success, jwt::JwtClaims};
use gemini::GeminiClient;
use sqlx::PgPool;

use crate::{
    dtos::studio::{CreativityRequest, EstimateRequest, GenerateRequest, StyleDto},
    misc::styles::STYLE_OPTIONS,
    services,
};

#[get("/styles")]
async fn get_styles() -> Res<impl Responder> {
    let styles: Vec<StyleDto> = STYLE_OPTIONS
        .iter()
        .map(|style| StyleDto {
            id: style.id,
            name: style.name,
            prompt: style.prompt,
        })
        .collect();
    Success::ok(styles)
}

#[post("/redesign")]
async fn post_redesign(
    claims: web::ReqData<JwtClaims>,
    pool: web::Data<Arc<PgPool>>,
    client: web::Data<GeminiClient>,
    req: web::Json<GenerateRequest>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let profile = db::profile::get_profile_by_id(pg_pool, claims.user_id).await?;
    let response = services::studio::redesign(pg_pool, &client, &profile, req.into_inner()).await?;
    Success::ok(response)
}

#[post("/concept")]
async fn post_concept(
    claims: web::ReqData<JwtClaims>,
    pool: web::Data<Arc<PgPool>>,
    client: web::Data<GeminiClient>,
    req: web::Json<GenerateRequest>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let profile = db::profile::get_profile_by_id(pg_pool, claims.user_id).await?;
    let response =
        services::studio::concept_from_plan(pg_pool, &client, &profile, req.into_inner()).await?;
    Success::ok(response)
}

#[post("/variation")]
async fn post_variation(
    claims: web::ReqData<JwtClaims>,
    pool: web::Data<Arc<PgPool>>,
    client: web::Data<GeminiClient>,
    req: web::Json<GenerateRequest>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let profile = db::profile::get_profile_by_id(pg_pool, claims.user_id).await?;
    let response =
        services::studio::variation(pg_pool, &client, &profile, req.into_inner()).await?;
    Success::ok(response)
}

#[post("/creativity")]
async fn post_creativity(
    claims: web::ReqData<JwtClaims>,
    pool: web::Data<Arc<PgPool>>,
    client: web::Data<GeminiClient>,
    req: web::Json<CreativityRequest>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let profile = db::profile::get_profile_by_id(pg_pool, claims.user_id).await?;
    let response =
        services::studio::creativity(pg_pool, &client, &profile, req.into_inner()).await?;
    Success::ok(response)
}

#[post("/internal-views")]
async fn post_internal_views(
    claims: web::ReqData<JwtClaims>,
    pool: web::Data<Arc<PgPool>>,
    client: web::Data<GeminiClient>,
    req: web::Json<GenerateRequest>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let profile = db::profile::get_profile_by_id(pg_pool, claims.user_id).await?;
    let response =
        services::studio::internal_views(pg_pool, &client, &profile, req.into_inner()).await?;
    Success::ok(response)
}

#[post("/estimate")]
async fn post_estimate(
    claims: web::ReqData<JwtClaims>,
    pool: web::Data<Arc<PgPool>>,
    client: web::Data<GeminiClient>,
    req: web::Json<EstimateRequest>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let profile = db::profile::get_profile_by_id(pg_pool, claims.user_id).await?;
    let response =
        services::studio::estimate_cost(pg_pool, &client, &profile, req.into_inner()).await?;
    Success::ok(response)
}
