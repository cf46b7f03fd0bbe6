//! Conversion of domain errors into HTTP responses

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

use pb_core::errors::{AuthError, DomainError, TokenError, ValidationError};
use pb_shared::{error_codes, ErrorResponse};

/// Error returned by handlers and extractors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Request body is not parseable JSON
    #[error("{0}")]
    InvalidJson(String),
}

impl From<AuthError> for ApiError {
    fn from(error: AuthError) -> Self {
        ApiError::Domain(error.into())
    }
}

impl From<ValidationError> for ApiError {
    fn from(error: ValidationError) -> Self {
        ApiError::Domain(error.into())
    }
}

impl From<TokenError> for ApiError {
    fn from(error: TokenError) -> Self {
        ApiError::Domain(error.into())
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Domain(error) => classify(error).0,
            ApiError::InvalidJson(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::Domain(error) => domain_error_response(error),
            ApiError::InvalidJson(message) => HttpResponse::BadRequest()
                .json(ErrorResponse::new(error_codes::INVALID_JSON, message.as_str())),
        }
    }
}

/// Status, error code and client message for a domain error
fn classify(error: &DomainError) -> (StatusCode, &'static str, String) {
    match error {
        DomainError::ValidationErr(e) => (
            StatusCode::BAD_REQUEST,
            error_codes::VALIDATION_ERROR,
            e.to_string(),
        ),
        DomainError::NotFound { .. } => (
            StatusCode::NOT_FOUND,
            error_codes::NOT_FOUND,
            error.to_string(),
        ),
        DomainError::Unauthorized | DomainError::Token(_) => (
            StatusCode::UNAUTHORIZED,
            error_codes::UNAUTHORIZED,
            AuthError::NotAuthorized.to_string(),
        ),
        DomainError::Auth(auth) => {
            let (status, code) = match auth {
                AuthError::EmailInUse => (StatusCode::CONFLICT, error_codes::CONFLICT),
                AuthError::InvalidCredentials => {
                    (StatusCode::UNAUTHORIZED, error_codes::INVALID_CREDENTIALS)
                }
                AuthError::EmailNotVerified => {
                    (StatusCode::UNAUTHORIZED, error_codes::EMAIL_NOT_VERIFIED)
                }
                AuthError::UnknownEmail | AuthError::NotAuthorized => {
                    (StatusCode::UNAUTHORIZED, error_codes::UNAUTHORIZED)
                }
                AuthError::UserNotFound => (StatusCode::NOT_FOUND, error_codes::NOT_FOUND),
                AuthError::AlreadyVerified | AuthError::InvalidSubscription => {
                    (StatusCode::BAD_REQUEST, error_codes::VALIDATION_ERROR)
                }
                AuthError::MailServiceFailure => (
                    StatusCode::SERVICE_UNAVAILABLE,
                    error_codes::SERVICE_UNAVAILABLE,
                ),
            };
            (status, code, auth.to_string())
        }
        DomainError::Internal { .. } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            error_codes::INTERNAL_ERROR,
            String::from("Internal server error"),
        ),
    }
}

/// Handle domain errors and convert them to appropriate HTTP responses
pub fn domain_error_response(error: &DomainError) -> HttpResponse {
    let (status, code, message) = classify(error);

    if status.is_server_error() {
        tracing::error!(error = %error, "Request failed");
    } else {
        tracing::debug!(status = status.as_u16(), error = %error, "Request rejected");
    }

    HttpResponse::build(status).json(ErrorResponse::new(code, message))
}
