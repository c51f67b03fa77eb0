use std::sync::Arc;

use actix_web::{Responder, get, post, web};
use common::{
    env_config::Config,
    error::Res,
    http::Success,
    jwt::{self, ClaimsSpec, JwtClaims},
};
use sqlx::PgPool;

use crate::{
    dtos::auth::{AuthResponse, LoginRequest, RegisterRequest},
    services,
};

#[post("/register")]
async fn post_register(
    config: web::Data<Arc<Config>>,
    pool: web::Data<Arc<PgPool>>,
    req: web::Json<RegisterRequest>,
) -> Res<impl Responder> {
    let profile = services::auth::register_user(&pool, req.into_inner()).await?;
    let token = jwt::generate_jwt(
        ClaimsSpec {
            user_id: profile.id,
            email: profile.email.clone(),
        },
        &config.jwt_config,
    )?;
    Success::created(AuthResponse { token, profile })
}

#[post("/login")]
async fn post_login(
    config: web::Data<Arc<Config>>,
    pool: web::Data<Arc<PgPool>>,
    req: web::Json<LoginRequest>,
) -> Res<impl Responder> {
    let profile = services::auth::authenticate_user(&pool, &req).await?;
    let token = jwt::generate_jwt(
        ClaimsSpec {
            user_id: profile.id,
            email: profile.email.clone(),
        },
        &config.jwt_config,
    )?;
    Success::ok(AuthResponse { token, profile })
}

/// Re-reads the authoritative profile, the explicit "refresh" the client
/// calls after a local balance mutation.
#[get("/me")]
async fn get_me(
    claims: web::ReqData<JwtClaims>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let profile = db::profile::get_profile_by_id(pg_pool, claims.user_id).await?;
    Success::ok(profile)
}
