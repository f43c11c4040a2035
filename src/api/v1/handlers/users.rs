/*
 * Responsibility
 * - /users read handlers (behind the auth gate)
 * - Each handler invokes its policy predicate before touching storage
 */
use axum::{
    Json,
    extract::{Path, Query, State},
};
use uuid::Uuid;

use crate::{
    api::v1::dto::users::{ListUsersQuery, UserResponse},
    api::v1::extractors::AuthCtx,
    error::AppError,
    repos::user_repo,
    services::auth::{policy, token::Role},
    state::AppState,
};

pub async fn list_users(
    State(state): State<AppState>,
    ctx: AuthCtx,
    Query(query): Query<ListUsersQuery>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    policy::require_role(&ctx.claims, Role::Admin)?;

    let (limit, offset) = query.limit_offset();
    let rows = user_repo::list(&state.db, limit, offset).await?;

    Ok(Json(rows.into_iter().map(UserResponse::from).collect()))
}

pub async fn get_user(
    State(state): State<AppState>,
    ctx: AuthCtx,
    Path(user_id): Path<Uuid>,
) -> Result<Json<UserResponse>, AppError> {
    policy::require_owner_or_admin(&ctx.claims, user_id)?;

    let row = user_repo::get(&state.db, user_id)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(Json(row.into()))
}
