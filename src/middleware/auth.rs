/*
 * Responsibility
 * - Auth gate: validate the bearer token → put AuthCtx into extensions
 * - Authentication only; role/ownership checks stay in the handlers
 */
use axum::{
    Router,
    body::Body,
    extract::State,
    http::Request,
    middleware::{self, Next},
    response::Response,
};

use crate::api::v1::extractors::AuthCtx;
use crate::error::AppError;
use crate::services::auth::TokenService;

/// Header carrying the bearer token. Existing clients send a bare `token`
/// header rather than `Authorization: Bearer`; kept for compatibility.
pub const TOKEN_HEADER: &str = "token";

/// Apply the auth gate to every route in `router`.
///
/// Example:
/// ```ignore
/// let users = users_routes();
/// let users = middleware::auth::apply(users, state.tokens.clone());
/// ```
pub fn apply<S>(router: Router<S>, tokens: TokenService) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.route_layer(middleware::from_fn_with_state(tokens, require_auth))
}

async fn require_auth(
    State(tokens): State<TokenService>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let token = req
        .headers()
        .get(TOKEN_HEADER)
        .and_then(|v| v.to_str().ok())
        .ok_or(AppError::Unauthorized)?;

    // The specific defect is logged, never returned: the caller only ever
    // sees a generic 401.
    let claims = match tokens.validate(token) {
        Ok(claims) => claims,
        Err(err) => {
            tracing::warn!(error = %err, "token verification failed");
            return Err(AppError::Unauthorized);
        }
    };

    // middleware → extractor hand-off
    req.extensions_mut().insert(AuthCtx::new(claims));

    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    use axum::{Router, http::StatusCode, routing::get};
    use tower::ServiceExt;
    use uuid::Uuid;

    use super::*;
    use crate::services::auth::token::Role;

    fn tokens() -> TokenService {
        TokenService::new("test-secret-key-for-jwt-testing-minimum-32-chars", 24, 168)
    }

    fn protected_router(tokens: TokenService, reached: Arc<AtomicBool>) -> Router {
        let router = Router::new().route(
            "/protected",
            get(move || {
                let reached = reached.clone();
                async move {
                    reached.store(true, Ordering::SeqCst);
                    "ok"
                }
            }),
        );
        apply(router, tokens)
    }

    fn request(token: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri("/protected");
        if let Some(t) = token {
            builder = builder.header(TOKEN_HEADER, t);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn missing_header_is_rejected_before_the_handler() {
        let reached = Arc::new(AtomicBool::new(false));
        let app = protected_router(tokens(), reached.clone());

        let res = app.oneshot(request(None)).await.unwrap();

        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        assert!(!reached.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn garbage_token_is_rejected_before_the_handler() {
        let reached = Arc::new(AtomicBool::new(false));
        let app = protected_router(tokens(), reached.clone());

        let res = app.oneshot(request(Some("not.a.jwt"))).await.unwrap();

        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        assert!(!reached.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn foreign_secret_token_is_rejected() {
        let reached = Arc::new(AtomicBool::new(false));
        let app = protected_router(tokens(), reached.clone());

        let other = TokenService::new("another-secret-key-for-testing-min-32-chars!", 24, 168);
        let pair = other
            .issue_pair(Uuid::new_v4(), "a@b.c", "A", "B", Role::User)
            .unwrap();

        let res = app
            .oneshot(request(Some(&pair.access_token)))
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        assert!(!reached.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn valid_token_reaches_the_handler() {
        let svc = tokens();
        let reached = Arc::new(AtomicBool::new(false));
        let app = protected_router(svc.clone(), reached.clone());

        let pair = svc
            .issue_pair(Uuid::new_v4(), "a@b.c", "A", "B", Role::User)
            .unwrap();

        let res = app
            .oneshot(request(Some(&pair.access_token)))
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::OK);
        assert!(reached.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn handler_sees_the_claim_set() {
        let svc = tokens();
        let sub = Uuid::new_v4();

        async fn whoami(ctx: AuthCtx) -> String {
            ctx.claims.sub.to_string()
        }

        let app = apply(Router::new().route("/protected", get(whoami)), svc.clone());
        let pair = svc
            .issue_pair(sub, "ada@example.com", "Ada", "Lovelace", Role::Admin)
            .unwrap();

        let res = app
            .oneshot(request(Some(&pair.access_token)))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);

        let body = axum::body::to_bytes(res.into_body(), 1024).await.unwrap();
        assert_eq!(body, sub.to_string().as_bytes());
    }
}
