use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use common::error::{AppError, Res};
use db::{
    models::profile::{AuthCredentials, Profile},
    profile::ProfileCreateRequest,
};
use sqlx::PgPool;

use crate::dtos::auth::{LoginRequest, RegisterRequest};

/// Registers a new profile with hashed credentials, in one transaction.
/// New accounts start with the welcome credit balance the schema assigns.
pub async fn register_user(pool: &PgPool, data: RegisterRequest) -> Res<Profile> {
    if data.email.trim().is_empty() || !data.email.contains('@') {
        return Err(AppError::BadRequest("A valid email is required".to_string()));
    }
    if data.password.len() < 8 {
        return Err(AppError::BadRequest(
            "Password must be at least 8 characters".to_string(),
        ));
    }

    if db::profile::exists_profile_by_email(pool, &data.email).await? {
        return Err(AppError::BadRequest(
            "An account with this email already exists".to_string(),
        ));
    }

    let salt = SaltString::generate(&mut OsRng);
    let password_hash = Argon2::default()
        .hash_password(data.password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))?
        .to_string();

    let mut tx = pool.begin().await.map_err(AppError::from)?;
    let profile = db::profile::insert_profile(
        &mut *tx,
        ProfileCreateRequest {
            email: data.email.trim().to_lowercase(),
            first_name: data.first_name,
            last_name: data.last_name,
        },
    )
    .await?;
    db::profile::insert_profile_credentials(
        &mut *tx,
        AuthCredentials {
            user_id: profile.id,
            password_hash,
        },
    )
    .await?;
    tx.commit().await.map_err(AppError::from)?;

    Ok(profile)
}

/// Authenticates existing user.
/// If user does not exist, returns 400.
/// If password hash does not match stored password hash, returns 401.
pub async fn authenticate_user(pool: &PgPool, login_data: &LoginRequest) -> Res<Profile> {
    let (profile, credentials) =
        db::profile::get_profile_with_password_hash(pool, &login_data.email)
            .await
            .map_err(|_| AppError::BadRequest("User with this email does not exist".to_string()))?;

    let parsed_hash = PasswordHash::new(&credentials.password_hash)
        .map_err(|e| AppError::Internal(format!("Stored password hash is invalid: {}", e)))?;
    let is_valid = Argon2::default()
        .verify_password(login_data.password.as_bytes(), &parsed_hash)
        .is_ok();

    if is_valid {
        Ok(profile)
    } else {
        log::warn!("Failed login attempt for {}", login_data.email);
        Err(AppError::Unauthorized("Invalid credentials".to_string()))
    }
}
