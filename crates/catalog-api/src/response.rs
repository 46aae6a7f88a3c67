//! # Response Envelope
//!
//! Every JSON response is wrapped:
//! - success: `{"status": "success", "data": <payload or null>}`
//! - error:   `{"status": "error", "erro": {"message": "..."}}`

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use catalog_auth::AuthError;
use catalog_core::CatalogError;
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

/// Success envelope
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub status: &'static str,
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Json<Self> {
        Json(Self {
            status: "success",
            data,
        })
    }
}

/// Error detail
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
}

/// Error envelope
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub status: &'static str,
    pub erro: ErrorBody,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: "error",
            erro: ErrorBody {
                message: message.into(),
            },
        }
    }
}

/// Errors surfaced to partners
#[derive(Debug, Error)]
pub enum ApiError {
    /// Login or gate failure
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Bad input
    #[error("{0}")]
    BadRequest(String),

    /// Unknown resource (argument is the resource name)
    #[error("{0} não encontrado.")]
    NotFound(&'static str),
}

impl ApiError {
    /// Returns the HTTP status code appropriate for this error
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::Auth(err) => err.status_code(),
            ApiError::BadRequest(_) => 400,
            ApiError::NotFound(_) => 404,
        }
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::Validation(message) => ApiError::BadRequest(message),
            CatalogError::NotFound { .. } => ApiError::NotFound("Produto"),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        warn!("Rejected request body: {}", rejection.body_text());
        ApiError::BadRequest("Corpo da requisição JSON inválido.".to_string())
    }
}

/// An id segment that cannot be decoded can never match a product
impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        warn!("Rejected path: {}", rejection.body_text());
        ApiError::NotFound("Produto")
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        warn!("Rejected query string: {}", rejection.body_text());
        ApiError::BadRequest("Parâmetros de consulta inválidos.".to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let code = self.status_code();
        let status = StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            error!("Request failed: {}", self);
        } else {
            warn!("Request rejected ({}): {}", code, self);
        }

        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}
