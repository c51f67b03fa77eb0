use std::sync::Arc;

use actix_web::{Responder, get, put, web};
use common::{
    error::{AppError, Res},
    http::Success,
    jwt::JwtClaims,
};
use db::models::profile::Profile;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dtos::credits::SetCreditsRequest;

/// Admin status comes from the stored profile, never from token claims, so
/// a revoked admin loses access as soon as the flag is cleared.
async fn require_admin(pool: &PgPool, claims: &JwtClaims) -> Res<Profile> {
    let profile = db::profile::get_profile_by_id(pool, claims.user_id).await?;
    if !profile.is_admin {
        return Err(AppError::Forbidden(
            "Administrator access required".to_string(),
        ));
    }
    Ok(profile)
}

#[get("/users")]
async fn get_users(
    claims: web::ReqData<JwtClaims>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    require_admin(pg_pool, &claims).await?;
    let profiles = db::profile::list_profiles(pg_pool).await?;
    Success::ok(profiles)
}

#[put("/users/{user_id}/credits")]
async fn put_user_credits(
    claims: web::ReqData<JwtClaims>,
    pool: web::Data<Arc<PgPool>>,
    path: web::Path<Uuid>,
    req: web::Json<SetCreditsRequest>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let admin = require_admin(pg_pool, &claims).await?;

    if req.credits < 0 {
        return Err(AppError::BadRequest(
            "The credit balance cannot be negative.".to_string(),
        ));
    }

    let user_id = path.into_inner();
    let updated = db::profile::set_credits(pg_pool, user_id, req.credits).await?;
    log::info!(
        "Admin {} set the balance of {} to {}",
        admin.email,
        updated.email,
        updated.credits
    );
    Success::ok(updated)
}
