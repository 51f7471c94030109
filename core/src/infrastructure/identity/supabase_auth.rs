use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

use crate::domain::{
    authentication::{
        entities::{AccessTokenClaims, AuthTokens, AuthUser, Session, SignUpOutcome},
        ports::IdentityProvider,
        value_objects::{SignInInput, SignUpRequest},
    },
    common::{IdentityConfig, entities::app_errors::CoreError},
};

const TOKEN_AUDIENCE: &str = "authenticated";
const CONFIRMATION_PENDING_MESSAGE: &str =
    "Email de confirmação enviado! Verifique sua caixa de entrada.";

/// GoTrue client for a hosted Supabase project.
#[derive(Clone)]
pub struct SupabaseIdentityProvider {
    base_url: String,
    anon_key: String,
    email_redirect_to: Option<String>,
    decoding_key: DecodingKey,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct GoTrueUser {
    id: Uuid,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    user_metadata: Option<serde_json::Value>,
}

impl From<GoTrueUser> for AuthUser {
    fn from(user: GoTrueUser) -> Self {
        let name = user
            .user_metadata
            .as_ref()
            .and_then(|m| m.get("name"))
            .and_then(|n| n.as_str())
            .map(str::to_string);

        AuthUser {
            id: user.id,
            email: user.email,
            name,
        }
    }
}

#[derive(Debug, Deserialize)]
struct GoTrueSession {
    access_token: String,
    refresh_token: String,
    token_type: String,
    expires_in: i64,
    user: GoTrueUser,
}

impl From<GoTrueSession> for AuthTokens {
    fn from(session: GoTrueSession) -> Self {
        AuthTokens {
            access_token: session.access_token,
            refresh_token: session.refresh_token,
            token_type: session.token_type,
            expires_in: session.expires_in,
            user: session.user.into(),
        }
    }
}

/// Sign-up answers with a session when auto-confirm is on, a bare user otherwise.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SignUpResponse {
    Session(GoTrueSession),
    User(GoTrueUser),
}

#[derive(Debug, Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

impl SupabaseIdentityProvider {
    pub fn new(config: &IdentityConfig) -> Result<Self, CoreError> {
        let client = Client::builder().build().map_err(|e| {
            tracing::error!("Failed to build identity HTTP client: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(Self {
            base_url: config.url.trim_end_matches('/').to_string(),
            anon_key: config.anon_key.clone(),
            email_redirect_to: config.email_redirect_to.clone(),
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            client,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        let url = format!("{}/auth/v1/{}", self.base_url, path);
        match &self.email_redirect_to {
            Some(redirect) if path == "signup" || path == "resend" => {
                format!("{}?redirect_to={}", url, urlencoding::encode(redirect))
            }
            _ => url,
        }
    }

    fn post(&self, url: &str) -> RequestBuilder {
        self.client.post(url).header("apikey", &self.anon_key)
    }

    async fn send(&self, request: RequestBuilder, action: &str) -> Result<reqwest::Response, CoreError> {
        let response = request.send().await.map_err(|e| {
            tracing::error!("Identity provider {} request failed: {}", action, e);
            CoreError::IdentityProviderError(format!("{} request failed", action))
        })?;

        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        tracing::error!("Identity provider {} error: {} - {}", action, status, body);

        Err(match status {
            StatusCode::BAD_REQUEST if action == "sign-in" => CoreError::InvalidCredentials,
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => CoreError::InvalidToken,
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                CoreError::InvalidRequest(provider_message(&body))
            }
            _ => CoreError::IdentityProviderError(format!("{} returned {}", action, status)),
        })
    }
}

/// Pulls the human-readable message out of a GoTrue error body.
fn provider_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            ["msg", "error_description", "message"]
                .iter()
                .find_map(|key| v.get(key).and_then(|m| m.as_str()).map(str::to_string))
        })
        .unwrap_or_else(|| "request rejected by identity provider".to_string())
}

impl IdentityProvider for SupabaseIdentityProvider {
    async fn sign_up(&self, request: SignUpRequest) -> Result<SignUpOutcome, CoreError> {
        let body = json!({
            "email": request.email,
            "password": request.password,
            "data": {
                "name": request.name,
                "subscription_status": "trial",
                "trial_ends_at": request.trial_ends_at.to_rfc3339(),
            }
        });

        let response = self
            .send(self.post(&self.endpoint("signup")).json(&body), "sign-up")
            .await?;

        let parsed: SignUpResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse sign-up response: {}", e);
            CoreError::IdentityProviderError("undecodable sign-up response".to_string())
        })?;

        Ok(match parsed {
            SignUpResponse::Session(session) => SignUpOutcome::SignedIn(session.into()),
            SignUpResponse::User(user) => SignUpOutcome::ConfirmationPending {
                user: user.into(),
                message: CONFIRMATION_PENDING_MESSAGE.to_string(),
            },
        })
    }

    async fn sign_in(&self, input: SignInInput) -> Result<AuthTokens, CoreError> {
        let credentials = Credentials {
            email: &input.email,
            password: &input.password,
        };

        let response = self
            .send(
                self.post(&self.endpoint("token?grant_type=password"))
                    .json(&credentials),
                "sign-in",
            )
            .await?;

        let session: GoTrueSession = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse sign-in response: {}", e);
            CoreError::IdentityProviderError("undecodable sign-in response".to_string())
        })?;

        Ok(session.into())
    }

    async fn sign_out(&self, access_token: String) -> Result<(), CoreError> {
        self.send(
            self.post(&self.endpoint("logout")).bearer_auth(access_token),
            "sign-out",
        )
        .await?;
        Ok(())
    }

    async fn resend_confirmation(&self, email: String) -> Result<(), CoreError> {
        let body = json!({ "type": "signup", "email": email });
        self.send(self.post(&self.endpoint("resend")).json(&body), "resend")
            .await?;
        Ok(())
    }

    fn verify_access_token(&self, access_token: &str) -> Result<Session, CoreError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_audience(&[TOKEN_AUDIENCE]);

        let data = decode::<AccessTokenClaims>(access_token, &self.decoding_key, &validation)
            .map_err(|e| {
                tracing::debug!("Rejected access token: {}", e);
                CoreError::InvalidToken
            })?;

        Ok(data.claims.into_session(access_token.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use jsonwebtoken::{EncodingKey, Header, encode};

    use super::*;

    const SECRET: &str = "super-secret-jwt-token-with-at-least-32-characters";

    fn provider(redirect: Option<&str>) -> SupabaseIdentityProvider {
        SupabaseIdentityProvider::new(&IdentityConfig {
            url: "https://project.supabase.co/".into(),
            anon_key: "anon".into(),
            jwt_secret: SECRET.into(),
            email_redirect_to: redirect.map(str::to_string),
        })
        .unwrap()
    }

    fn token(aud: &str, exp_offset: i64) -> String {
        let claims = json!({
            "sub": "00000000-0000-0000-0000-000000000042",
            "aud": aud,
            "exp": Utc::now().timestamp() + exp_offset,
            "email": "ana@example.com",
            "user_metadata": { "name": "Ana" }
        });
        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn valid_token_yields_session() {
        let jwt = token("authenticated", 3600);
        let session = provider(None).verify_access_token(&jwt).unwrap();
        assert_eq!(session.user_id, Uuid::from_u128(0x42));
        assert_eq!(session.email, "ana@example.com");
        assert_eq!(session.display_name.as_deref(), Some("Ana"));
        assert_eq!(session.access_token, jwt);
    }

    #[test]
    fn wrong_audience_or_expired_token_is_rejected() {
        let p = provider(None);
        assert_eq!(
            p.verify_access_token(&token("anon", 3600)),
            Err(CoreError::InvalidToken)
        );
        assert_eq!(
            p.verify_access_token(&token("authenticated", -3600)),
            Err(CoreError::InvalidToken)
        );
        assert_eq!(p.verify_access_token("not-a-jwt"), Err(CoreError::InvalidToken));
    }

    #[test]
    fn redirect_is_only_added_to_email_flows() {
        let p = provider(Some("https://temai.app/auth/callback"));
        assert_eq!(
            p.endpoint("signup"),
            "https://project.supabase.co/auth/v1/signup?redirect_to=https%3A%2F%2Ftemai.app%2Fauth%2Fcallback"
        );
        assert_eq!(p.endpoint("logout"), "https://project.supabase.co/auth/v1/logout");
    }

    #[test]
    fn sign_up_response_shapes() {
        let session: SignUpResponse = serde_json::from_value(json!({
            "access_token": "a", "refresh_token": "r", "token_type": "bearer", "expires_in": 3600,
            "user": { "id": "00000000-0000-0000-0000-000000000001", "email": "a@b.c" }
        }))
        .unwrap();
        assert!(matches!(session, SignUpResponse::Session(_)));

        let user: SignUpResponse = serde_json::from_value(json!({
            "id": "00000000-0000-0000-0000-000000000001", "email": "a@b.c", "confirmation_sent_at": "2025-01-01T00:00:00Z"
        }))
        .unwrap();
        assert!(matches!(user, SignUpResponse::User(_)));
    }

    #[test]
    fn provider_message_is_extracted() {
        assert_eq!(
            provider_message(r#"{"code":422,"msg":"Password should be at least 6 characters"}"#),
            "Password should be at least 6 characters"
        );
        assert_eq!(provider_message("oops"), "request rejected by identity provider");
    }
}
