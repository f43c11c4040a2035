/*
 * Responsibility
 * - v1 URL layout
 * - auth routes stay public; users routes go behind the auth gate
 */
use axum::{Router, routing::get, routing::post};

use crate::middleware;
use crate::state::AppState;

use crate::api::v1::handlers::{
    auth::{login, signup},
    health::health,
    users::{get_user, list_users},
};

pub fn routes(state: &AppState) -> Router<AppState> {
    let public = Router::new()
        .route("/health", get(health))
        .route("/auth/signup", post(signup))
        .route("/auth/login", post(login));

    let protected = Router::new()
        .route("/users", get(list_users))
        .route("/users/{user_id}", get(get_user));

    public.merge(middleware::auth::apply(
        protected,
        state.tokens.clone(),
    ))
}
