/*
 * Responsibility
 * - Shared context bound to the Router (AppState)
 * - Clone-cheap: PgPool is an Arc handle, TokenService holds prebuilt keys
 */
use sqlx::PgPool;

use crate::services::auth::TokenService;

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub tokens: TokenService,
}

impl AppState {
    pub fn new(db: PgPool, tokens: TokenService) -> Self {
        Self { db, tokens }
    }
}
