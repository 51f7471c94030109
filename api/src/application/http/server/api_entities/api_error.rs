use axum::{
    Json,
    extract::{
        FromRequest, Request,
        multipart::MultipartError,
        rejection::JsonRejection,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use temai_core::domain::common::entities::app_errors::CoreError;
use thiserror::Error;
use tracing::error;
use utoipa::ToSchema;
use validator::Validate;

pub const GENERATION_FAILED: &str = "Erro ao gerar receitas";
pub const SEARCH_FAILED: &str = "Erro ao buscar receitas";
const INTERNAL_FAILURE: &str = "Erro interno do servidor";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    PayloadTooLarge(String),

    #[error("{0}")]
    InternalServerError(String),

    #[error("{0}")]
    BadGateway(String),
}

/// Body of every error response.
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct ApiErrorResponse {
    pub error: String,
    pub code: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::BadGateway(_) => StatusCode::BAD_GATEWAY,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "E_BAD_REQUEST",
            ApiError::Unauthorized(_) => "E_UNAUTHORIZED",
            ApiError::Forbidden(_) => "E_FORBIDDEN",
            ApiError::NotFound(_) => "E_NOT_FOUND",
            ApiError::PayloadTooLarge(_) => "E_PAYLOAD_TOO_LARGE",
            ApiError::InternalServerError(_) => "E_INTERNAL_SERVER_ERROR",
            ApiError::BadGateway(_) => "E_BAD_GATEWAY",
        }
    }

    /// Replaces the generic 500 message with one naming the failed operation.
    pub fn with_internal_message(self, message: &str) -> Self {
        match self {
            ApiError::InternalServerError(_) => ApiError::InternalServerError(message.to_string()),
            other => other,
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidRequest(message) => ApiError::BadRequest(message),
            CoreError::InvalidCredentials => {
                ApiError::Unauthorized("Email ou senha inválidos".to_string())
            }
            CoreError::InvalidToken => {
                ApiError::Unauthorized("Sessão inválida ou expirada".to_string())
            }
            CoreError::Forbidden(message) => ApiError::Forbidden(message),
            CoreError::NotFound => ApiError::NotFound("Recurso não encontrado".to_string()),
            CoreError::PayloadTooLarge(max) => ApiError::PayloadTooLarge(format!(
                "Arquivo muito grande, o limite é {} bytes",
                max
            )),
            CoreError::ObjectStorageError(e) => {
                error!("Object storage failure: {}", e);
                ApiError::BadGateway("Falha ao armazenar o arquivo".to_string())
            }
            CoreError::UpstreamError(e)
            | CoreError::StorageError(e)
            | CoreError::IdentityProviderError(e) => {
                error!("Request failed: {}", e);
                ApiError::InternalServerError(INTERNAL_FAILURE.to_string())
            }
            CoreError::InternalServerError => {
                ApiError::InternalServerError(INTERNAL_FAILURE.to_string())
            }
        }
    }
}

impl From<MultipartError> for ApiError {
    fn from(err: MultipartError) -> Self {
        if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
            return ApiError::PayloadTooLarge(err.body_text());
        }
        ApiError::BadRequest(format!("Falha ao ler o formulário: {}", err.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ApiErrorResponse {
            error: self.to_string(),
            code: self.code().to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// JSON body extractor that also runs the `validator` rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| ApiError::BadRequest(e.body_text()))?;

        value.validate().map_err(|errors| {
            let message = errors
                .field_errors()
                .into_iter()
                .flat_map(|(field, field_errors)| {
                    field_errors.iter().map(move |e| match &e.message {
                        Some(message) => message.to_string(),
                        None => format!("{} is invalid", field),
                    })
                })
                .collect::<Vec<String>>()
                .join(", ");
            ApiError::BadRequest(message)
        })?;

        Ok(ValidateJson(value))
    }
}

#[cfg(test)]
mod tests {
    use axum::{Router, routing::post};
    use axum_test::TestServer;
    use serde_json::{Value, json};

    use super::*;

    #[derive(Debug, Deserialize, Validate)]
    struct Payload {
        #[validate(length(min = 1, message = "query is required"))]
        query: String,
    }

    async fn echo(ValidateJson(payload): ValidateJson<Payload>) -> String {
        payload.query
    }

    async fn failing() -> Result<String, ApiError> {
        Err(ApiError::from(CoreError::UpstreamError("timeout".to_string()))
            .with_internal_message(GENERATION_FAILED))
    }

    fn server() -> TestServer {
        let app = Router::new()
            .route("/echo", post(echo))
            .route("/fail", post(failing));
        TestServer::new(app).unwrap()
    }

    #[test]
    fn core_errors_map_to_http_statuses() {
        let cases = [
            (CoreError::InvalidRequest("x".into()), StatusCode::BAD_REQUEST),
            (CoreError::InvalidCredentials, StatusCode::UNAUTHORIZED),
            (CoreError::InvalidToken, StatusCode::UNAUTHORIZED),
            (CoreError::Forbidden("premium".into()), StatusCode::FORBIDDEN),
            (CoreError::NotFound, StatusCode::NOT_FOUND),
            (CoreError::PayloadTooLarge(10), StatusCode::PAYLOAD_TOO_LARGE),
            (CoreError::UpstreamError("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (CoreError::StorageError("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (CoreError::ObjectStorageError("x".into()), StatusCode::BAD_GATEWAY),
            (CoreError::InternalServerError, StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (core, status) in cases {
            assert_eq!(ApiError::from(core).status(), status);
        }
    }

    #[test]
    fn internal_details_are_not_exposed() {
        let err = ApiError::from(CoreError::StorageError("relation does not exist".into()));
        assert_eq!(err.to_string(), INTERNAL_FAILURE);

        let err = err.with_internal_message(SEARCH_FAILED);
        assert_eq!(err.to_string(), SEARCH_FAILED);

        let bad = ApiError::BadRequest("x".into()).with_internal_message(SEARCH_FAILED);
        assert_eq!(bad, ApiError::BadRequest("x".into()));
    }

    #[tokio::test]
    async fn error_responses_use_the_envelope() {
        let response = server().post("/fail").await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        response.assert_json(&json!({
            "error": "Erro ao gerar receitas",
            "code": "E_INTERNAL_SERVER_ERROR"
        }));
    }

    #[tokio::test]
    async fn validation_failure_is_a_bad_request() {
        let response = server().post("/echo").json(&json!({ "query": "" })).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["code"], "E_BAD_REQUEST");
        assert_eq!(body["error"], "query is required");
    }

    #[tokio::test]
    async fn malformed_json_is_a_bad_request() {
        let response = server()
            .post("/echo")
            .text("{not json")
            .content_type("application/json")
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["code"], "E_BAD_REQUEST");
    }

    #[tokio::test]
    async fn valid_payload_passes_through() {
        let response = server().post("/echo").json(&json!({ "query": "bolo" })).await;

        response.assert_status_ok();
        response.assert_text("bolo");
    }
}
