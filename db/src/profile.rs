use common::error::{AppError, Res};
use chrono::NaiveDateTime;
use sqlx::{Executor, Postgres};
use uuid::Uuid;

use crate::models::profile::{AuthCredentials, Profile};

pub struct ProfileCreateRequest {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

pub async fn exists_profile_by_email<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    email: &str,
) -> Res<bool> {
    sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM profiles WHERE email = $1)")
        .bind(email)
        .fetch_one(executor)
        .await
        .map_err(AppError::from)
}

pub async fn get_profile_by_id<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    user_id: Uuid,
) -> Res<Profile> {
    sqlx::query_as::<_, Profile>("SELECT * FROM profiles WHERE id = $1")
        .bind(user_id)
        .fetch_one(executor)
        .await
        .map_err(AppError::from)
}

pub async fn insert_profile<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    data: ProfileCreateRequest,
) -> Res<Profile> {
    sqlx::query_as::<_, Profile>(
        r#"
        INSERT INTO profiles (email, first_name, last_name)
        VALUES ($1, $2, $3)
        RETURNING *
        "#,
    )
    .bind(data.email)
    .bind(data.first_name)
    .bind(data.last_name)
    .fetch_one(executor)
    .await
    .map_err(AppError::from)
}

pub async fn insert_profile_credentials<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    data: AuthCredentials,
) -> Res<()> {
    sqlx::query(
        r#"
        INSERT INTO auth_credentials (user_id, password_hash)
        VALUES ($1, $2)
        "#,
    )
    .bind(data.user_id)
    .bind(data.password_hash)
    .execute(executor)
    .await?;
    Ok(())
}

#[derive(sqlx::FromRow)]
struct ProfileWithHash {
    id: Uuid,
    email: String,
    first_name: String,
    last_name: String,
    credits: i32,
    is_admin: bool,
    created_at: NaiveDateTime,
    updated_at: NaiveDateTime,
    password_hash: String,
}

pub async fn get_profile_with_password_hash<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    email: &str,
) -> Res<(Profile, AuthCredentials)> {
    sqlx::query_as::<_, ProfileWithHash>(
        r#"
        SELECT p.*, ac.password_hash
        FROM profiles p
        JOIN auth_credentials ac ON p.id = ac.user_id
        WHERE p.email = $1
        "#,
    )
    .bind(email)
    .fetch_one(executor)
    .await
    .map(|record| {
        (
            Profile {
                id: record.id,
                email: record.email,
                first_name: record.first_name,
                last_name: record.last_name,
                credits: record.credits,
                is_admin: record.is_admin,
                created_at: record.created_at,
                updated_at: record.updated_at,
            },
            AuthCredentials {
                user_id: record.id,
                password_hash: record.password_hash,
            },
        )
    })
    .map_err(AppError::from)
}

/// Debits `cost` credits in a single statement and returns the new balance.
/// The CHECK constraint on `credits` rejects a debit below zero.
pub async fn debit_credits<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    user_id: Uuid,
    cost: i32,
) -> Res<i32> {
    sqlx::query_scalar::<_, i32>(
        r#"
        UPDATE profiles
        SET credits = credits - $2, updated_at = now()
        WHERE id = $1
        RETURNING credits
        "#,
    )
    .bind(user_id)
    .bind(cost)
    .fetch_one(executor)
    .await
    .map_err(AppError::from)
}

/// Adds purchased credits to the profile matching `email`.
/// Returns the new balance, or `None` when no profile has that email.
pub async fn credit_profile_by_email<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    email: &str,
    amount: i32,
) -> Res<Option<i32>> {
    sqlx::query_scalar::<_, i32>(
        r#"
        UPDATE profiles
        SET credits = credits + $2, updated_at = now()
        WHERE email = $1
        RETURNING credits
        "#,
    )
    .bind(email)
    .bind(amount)
    .fetch_optional(executor)
    .await
    .map_err(AppError::from)
}

pub async fn list_profiles<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
) -> Res<Vec<Profile>> {
    sqlx::query_as::<_, Profile>("SELECT * FROM profiles ORDER BY created_at DESC")
        .fetch_all(executor)
        .await
        .map_err(AppError::from)
}

/// Administrative overwrite of a profile's balance.
pub async fn set_credits<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    user_id: Uuid,
    credits: i32,
) -> Res<Profile> {
    sqlx::query_as::<_, Profile>(
        r#"
        UPDATE profiles
        SET credits = $2, updated_at = now()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(credits)
    .fetch_one(executor)
    .await
    .map_err(AppError::from)
}
