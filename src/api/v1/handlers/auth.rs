/*
 * Responsibility
 * - POST /auth/signup, POST /auth/login
 * - Credential verification + token issuance; storage via user_repo
 */
use axum::{Json, extract::State, http::StatusCode};
use tracing::{error, warn};

use crate::{
    api::v1::dto::auth::{LoginRequest, LoginResponse, SignupRequest, SignupResponse},
    error::AppError,
    repos::user_repo,
    services::auth::{password, token::Role},
    state::AppState,
};

pub async fn signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> Result<(StatusCode, Json<SignupResponse>), AppError> {
    req.validate()
        .map_err(|msg| AppError::InvalidRequest(msg.to_string()))?;

    let password_hash = password::hash(&req.password).map_err(|e| {
        error!(error = %e, "password hashing failed");
        AppError::Internal
    })?;

    let row = user_repo::create(
        &state.db,
        req.first_name.trim(),
        req.last_name.trim(),
        req.email.trim(),
        &req.phone,
        &req.role,
        &password_hash,
    )
    .await?;

    // validate() already pinned role to the closed set
    let role = Role::parse(&row.role).ok_or(AppError::Internal)?;

    let pair = state
        .tokens
        .issue_pair(row.user_id, &row.email, &row.first_name, &row.last_name, role)?;

    user_repo::update_tokens(&state.db, row.user_id, &pair.access_token, &pair.refresh_token)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(SignupResponse {
            user_id: row.user_id,
        }),
    ))
}

pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let found = user_repo::get_by_email(&state.db, req.email.trim()).await?;

    // Unknown email and wrong password take the same path out: a caller
    // must not be able to probe which emails exist.
    let Some(row) = found else {
        return Err(AppError::Unauthorized);
    };
    if !password::verify(&row.password_hash, &req.password) {
        return Err(AppError::Unauthorized);
    }

    let role = Role::parse(&row.role).ok_or_else(|| {
        warn!(user_id = %row.user_id, role = %row.role, "stored role is outside the closed set");
        AppError::Internal
    })?;

    let pair = state
        .tokens
        .issue_pair(row.user_id, &row.email, &row.first_name, &row.last_name, role)?;

    user_repo::update_tokens(&state.db, row.user_id, &pair.access_token, &pair.refresh_token)
        .await?;

    Ok(Json(LoginResponse {
        token: pair.access_token,
        refresh_token: pair.refresh_token,
        expires_in: state.tokens.access_ttl_seconds(),
        user: row.into(),
    }))
}
