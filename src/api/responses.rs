//! Common API response types

use actix_web::{error::InternalError, http::StatusCode, HttpRequest, HttpResponse};
use serde::Serialize;

use crate::models::EngineError;

/// Standard API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a success response
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// Create an error response
    pub fn error(message: impl Into<String>) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// HTTP status for an engine error
pub fn status_for(error: &EngineError) -> StatusCode {
    match error {
        EngineError::NotFound { .. } => StatusCode::NOT_FOUND,
        EngineError::ValidationError(_) => StatusCode::BAD_REQUEST,
        EngineError::SerializationError(_) => StatusCode::BAD_REQUEST,
        EngineError::ConfigError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        EngineError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Convert EngineError to HTTP response
impl From<EngineError> for HttpResponse {
    fn from(error: EngineError) -> Self {
        HttpResponse::build(status_for(&error)).json(ApiResponse::<()>::error(error.to_string()))
    }
}

/// Wrap an engine error so handlers can propagate it with `?`
pub fn api_error(error: EngineError) -> actix_web::Error {
    InternalError::from_response(error.to_string(), HttpResponse::from(error)).into()
}

/// Render malformed JSON bodies in the standard envelope
pub fn json_error_handler(err: actix_web::error::JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let message = format!("Invalid request body: {}", err);
    InternalError::from_response(err, HttpResponse::BadRequest().json(ApiResponse::<()>::error(message))).into()
}

/// Render malformed query strings in the standard envelope
pub fn query_error_handler(err: actix_web::error::QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let message = format!("Invalid query: {}", err);
    InternalError::from_response(err, HttpResponse::BadRequest().json(ApiResponse::<()>::error(message))).into()
}

/// Result type for handlers
pub type ApiResult<T> = Result<T, actix_web::Error>;
