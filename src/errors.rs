use std::fmt;

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;

use crate::consts::INVALID_TOKEN_MESSAGE;

#[derive(Debug, Clone)]
pub enum ShimError {
    ValidationError(String),
    AuthError,
    BackendError(String),
    NetworkError(String),
    ParseError(String),
    ConfigError(String),
}

impl ShimError {
    /// Message placed in the `error` field of the response body.
    pub fn message(&self) -> String {
        match self {
            ShimError::ValidationError(msg) => msg.clone(),
            ShimError::AuthError => INVALID_TOKEN_MESSAGE.to_string(),
            _ => self.to_string(),
        }
    }
}

impl fmt::Display for ShimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShimError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            ShimError::AuthError => write!(f, "Auth error: {}", INVALID_TOKEN_MESSAGE),
            ShimError::BackendError(msg) => write!(f, "Backend error: {}", msg),
            ShimError::NetworkError(msg) => write!(f, "Network error: {}", msg),
            ShimError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ShimError::ConfigError(msg) => write!(f, "Config error: {}", msg),
        }
    }
}

impl std::error::Error for ShimError {}

impl ResponseError for ShimError {
    fn status_code(&self) -> StatusCode {
        match self {
            ShimError::ValidationError(_) => StatusCode::BAD_REQUEST,
            ShimError::AuthError => StatusCode::UNAUTHORIZED,
            ShimError::BackendError(_)
            | ShimError::NetworkError(_)
            | ShimError::ParseError(_)
            | ShimError::ConfigError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({ "error": self.message() }))
    }
}

impl From<reqwest::Error> for ShimError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ShimError::ParseError(err.to_string())
        } else {
            ShimError::NetworkError(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ShimError {
    fn from(err: serde_json::Error) -> Self {
        ShimError::ParseError(err.to_string())
    }
}
