use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_extra::headers::{Authorization, HeaderMapExt, authorization::Bearer};
use temai_core::domain::authentication::{entities::Session, ports::AuthService};
use tracing::debug;

use super::http::server::{api_entities::api_error::ApiError, app_state::AppState};

fn bearer_token(req: &Request) -> Option<String> {
    req.headers()
        .typed_get::<Authorization<Bearer>>()
        .map(|Authorization(bearer)| bearer.token().trim().to_string())
        .filter(|token| !token.is_empty())
}

/// Resolves the bearer token into a [`Session`] and stores it in the request
/// extensions. Requests without a token continue anonymously; a token that
/// does not verify is rejected.
pub async fn auth(State(state): State<AppState>, mut req: Request, next: Next) -> Response {
    if let Some(token) = bearer_token(&req) {
        match state.service.authenticate(token) {
            Ok(session) => {
                req.extensions_mut().insert(session);
            }
            Err(e) => {
                debug!("Rejected bearer token: {}", e);
                return ApiError::from(e).into_response();
            }
        }
    }

    next.run(req).await
}

/// Handler argument for routes that need a signed-in user.
pub struct RequiredSession(pub Session);

impl<S> FromRequestParts<S> for RequiredSession
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Session>()
            .cloned()
            .map(RequiredSession)
            .ok_or_else(|| ApiError::Unauthorized("Autenticação necessária".to_string()))
    }
}

/// Handler argument for routes that work with or without a user.
pub struct MaybeSession(pub Option<Session>);

impl<S> FromRequestParts<S> for MaybeSession
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _: &S) -> Result<Self, Self::Rejection> {
        Ok(MaybeSession(parts.extensions.get::<Session>().cloned()))
    }
}

#[cfg(test)]
mod tests {
    use axum::{Extension, Router, http::StatusCode, routing::get};
    use axum_test::TestServer;
    use serde_json::Value;
    use uuid::Uuid;

    use super::*;

    async fn whoami(RequiredSession(session): RequiredSession) -> String {
        session.email
    }

    async fn maybe(MaybeSession(session): MaybeSession) -> String {
        session.map(|s| s.email).unwrap_or_else(|| "anonymous".to_string())
    }

    fn session() -> Session {
        Session {
            user_id: Uuid::from_u128(7),
            email: "chef@example.com".to_string(),
            access_token: "token".to_string(),
            display_name: None,
        }
    }

    #[tokio::test]
    async fn required_session_rejects_anonymous_requests() {
        let server = TestServer::new(Router::new().route("/me", get(whoami))).unwrap();

        let response = server.get("/me").await;

        response.assert_status(StatusCode::UNAUTHORIZED);
        let body: Value = response.json();
        assert_eq!(body["code"], "E_UNAUTHORIZED");
    }

    #[tokio::test]
    async fn required_session_reads_the_extension() {
        let app = Router::new()
            .route("/me", get(whoami))
            .layer(Extension(session()));
        let server = TestServer::new(app).unwrap();

        server.get("/me").await.assert_text("chef@example.com");
    }

    #[tokio::test]
    async fn maybe_session_allows_anonymous_requests() {
        let server = TestServer::new(Router::new().route("/maybe", get(maybe))).unwrap();

        server.get("/maybe").await.assert_text("anonymous");
    }
}
