//! Translation of domain errors into HTTP responses

use actix_web::{error::JsonPayloadError, http::StatusCode, HttpRequest, HttpResponse, ResponseError};
use validator::ValidationErrors;

use realtor_core::errors::{AuthError, DomainError, TokenError, ValidationError};

use crate::dto::error::{error_codes, ErrorResponse, ErrorResponseExt};

/// Message returned for every fault the client cannot act on
const INTERNAL_MESSAGE: &str = "An internal error occurred";

/// Domain error carried through actix-web's error path
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct ApiError(#[from] pub DomainError);

impl From<AuthError> for ApiError {
    fn from(error: AuthError) -> Self {
        Self(error.into())
    }
}

impl From<TokenError> for ApiError {
    fn from(error: TokenError) -> Self {
        Self(error.into())
    }
}

impl From<ValidationError> for ApiError {
    fn from(error: ValidationError) -> Self {
        Self(error.into())
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        status_and_code(&self.0).0
    }

    fn error_response(&self) -> HttpResponse {
        handle_domain_error(&self.0)
    }
}

/// HTTP status and machine-readable code for a domain error
pub fn status_and_code(error: &DomainError) -> (StatusCode, &'static str) {
    match error {
        DomainError::Auth(auth_error) => match auth_error {
            AuthError::UserAlreadyExists => (StatusCode::CONFLICT, error_codes::CONFLICT),
            AuthError::InvalidCredentials => {
                (StatusCode::BAD_REQUEST, error_codes::INVALID_CREDENTIALS)
            }
            AuthError::ProductKeyRequired | AuthError::InvalidProductKey => {
                (StatusCode::UNAUTHORIZED, error_codes::PRODUCT_KEY_INVALID)
            }
            AuthError::InsufficientPermissions => (StatusCode::FORBIDDEN, error_codes::FORBIDDEN),
            AuthError::UserNotFound => (StatusCode::UNAUTHORIZED, error_codes::UNAUTHORIZED),
        },
        DomainError::Token(token_error) => match token_error {
            TokenError::TokenExpired => (StatusCode::UNAUTHORIZED, error_codes::TOKEN_EXPIRED),
            TokenError::InvalidSignature | TokenError::InvalidTokenFormat => {
                (StatusCode::UNAUTHORIZED, error_codes::TOKEN_INVALID)
            }
            TokenError::TokenGenerationFailed => {
                (StatusCode::INTERNAL_SERVER_ERROR, error_codes::INTERNAL_ERROR)
            }
        },
        DomainError::Validation(_) => (StatusCode::BAD_REQUEST, error_codes::VALIDATION_ERROR),
        DomainError::Database(_) | DomainError::Internal { .. } => {
            (StatusCode::INTERNAL_SERVER_ERROR, error_codes::INTERNAL_ERROR)
        }
    }
}

/// Handle domain errors and convert them to appropriate HTTP responses
pub fn handle_domain_error(error: &DomainError) -> HttpResponse {
    let (status, code) = status_and_code(error);

    let message = if status.is_server_error() {
        tracing::error!(error = %error, "Request failed");
        INTERNAL_MESSAGE.to_string()
    } else {
        tracing::debug!(error = %error, status = status.as_u16(), "Request rejected");
        error.to_string()
    };

    ErrorResponse::new(code, message).to_response(status)
}

/// 400 response listing the fields that failed request validation
pub fn validation_error_response(errors: &ValidationErrors) -> HttpResponse {
    let mut response =
        ErrorResponse::new(error_codes::VALIDATION_ERROR, "Invalid request data");

    for (field, field_errors) in errors.field_errors() {
        let messages: Vec<String> = field_errors
            .iter()
            .map(|e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string())
            })
            .collect();
        response = response.add_detail(field, messages);
    }

    response.to_response(StatusCode::BAD_REQUEST)
}

/// Render malformed JSON bodies in the shared error shape
pub fn json_error_handler(error: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let response = ErrorResponse::new(error_codes::VALIDATION_ERROR, error.to_string())
        .to_response(StatusCode::BAD_REQUEST);

    actix_web::error::InternalError::from_response(error, response).into()
}
