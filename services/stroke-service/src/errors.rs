use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("POST required")]
    MethodNotAllowed,

    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    #[error("Request body must be a JSON object, got {0}")]
    NotAnObject(&'static str),

    #[error("Request body must be UTF-8 text")]
    InvalidEncoding,

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ServiceError {
    /// Label used for the rejected-requests metric
    pub fn reason(&self) -> &'static str {
        match self {
            ServiceError::MethodNotAllowed => "method_not_allowed",
            ServiceError::InvalidJson(_) => "invalid_json",
            ServiceError::NotAnObject(_) => "not_an_object",
            ServiceError::InvalidEncoding => "invalid_encoding",
            ServiceError::InternalError(_) => "internal",
        }
    }
}

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ServiceError::InvalidJson(_)
            | ServiceError::NotAnObject(_)
            | ServiceError::InvalidEncoding => StatusCode::BAD_REQUEST,
            ServiceError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ServiceError::MethodNotAllowed => {
                HttpResponse::MethodNotAllowed().json(serde_json::json!({
                    "error": "POST required"
                }))
            }
            ServiceError::InvalidJson(detail) => {
                HttpResponse::BadRequest().json(serde_json::json!({
                    "error": "Invalid JSON",
                    "message": detail
                }))
            }
            ServiceError::NotAnObject(_) => {
                HttpResponse::BadRequest().json(serde_json::json!({
                    "error": "Request body must be a JSON object",
                    "message": self.to_string()
                }))
            }
            ServiceError::InvalidEncoding => {
                HttpResponse::BadRequest().json(serde_json::json!({
                    "error": self.to_string()
                }))
            }
            ServiceError::InternalError(_) => {
                HttpResponse::InternalServerError().json(serde_json::json!({
                    "error": "Internal error",
                    "message": self.to_string()
                }))
            }
        }
    }
}

impl From<stroke_risk::Error> for ServiceError {
    fn from(err: stroke_risk::Error) -> Self {
        match err {
            stroke_risk::Error::InvalidJson(e) => ServiceError::InvalidJson(e.to_string()),
            stroke_risk::Error::NotAnObject(kind) => ServiceError::NotAnObject(kind),
        }
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
