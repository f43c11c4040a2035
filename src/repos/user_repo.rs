/*
 * Responsibility
 * - SQLx operations against the users table
 * - Takes a PgPool, returns rows; DB errors surface as RepoError
 */
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::repos::error::RepoError;

#[derive(Debug, FromRow)]
pub struct UserRow {
    pub user_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub role: String,
    pub password_hash: String,
}

pub async fn create(
    db: &PgPool,
    first_name: &str,
    last_name: &str,
    email: &str,
    phone: &str,
    role: &str,
    password_hash: &str,
) -> Result<UserRow, RepoError> {
    let row = sqlx::query_as::<_, UserRow>(
        r#"
        INSERT INTO users (first_name, last_name, email, phone, role, password_hash)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING user_id, first_name, last_name, email, phone, role, password_hash
        "#,
    )
    .bind(first_name)
    .bind(last_name)
    .bind(email)
    .bind(phone)
    .bind(role)
    .bind(password_hash)
    .fetch_one(db)
    .await
    .map_err(RepoError::from_sqlx)?;

    Ok(row)
}

pub async fn get(db: &PgPool, user_id: Uuid) -> Result<Option<UserRow>, RepoError> {
    let row = sqlx::query_as::<_, UserRow>(
        r#"
        SELECT user_id, first_name, last_name, email, phone, role, password_hash
        FROM users
        WHERE user_id = $1
        "#,
    )
    .bind(user_id)
    .fetch_optional(db)
    .await?;

    Ok(row)
}

// Exact match as stored; the unique index on email makes this at-most-one.
pub async fn get_by_email(db: &PgPool, email: &str) -> Result<Option<UserRow>, RepoError> {
    let row = sqlx::query_as::<_, UserRow>(
        r#"
        SELECT user_id, first_name, last_name, email, phone, role, password_hash
        FROM users
        WHERE email = $1
        "#,
    )
    .bind(email)
    .fetch_optional(db)
    .await?;

    Ok(row)
}

pub async fn list(db: &PgPool, limit: i64, offset: i64) -> Result<Vec<UserRow>, RepoError> {
    let rows = sqlx::query_as::<_, UserRow>(
        r#"
        SELECT user_id, first_name, last_name, email, phone, role, password_hash
        FROM users
        ORDER BY created_on DESC
        LIMIT $1 OFFSET $2
        "#,
    )
    .bind(limit)
    .bind(offset)
    .fetch_all(db)
    .await?;

    Ok(rows)
}

/// Persist the last-issued token pair on the user row.
///
/// Informational only (mirrors what was handed to the client); validation
/// never consults these columns.
pub async fn update_tokens(
    db: &PgPool,
    user_id: Uuid,
    token: &str,
    refresh_token: &str,
) -> Result<(), RepoError> {
    sqlx::query(
        r#"
        UPDATE users
        SET token = $2, refresh_token = $3, updated_on = now()
        WHERE user_id = $1
        "#,
    )
    .bind(user_id)
    .bind(token)
    .bind(refresh_token)
    .execute(db)
    .await?;

    Ok(())
}
