//! API error types and helpers.
//!
//! # Purpose and responsibility
//! Centralizes HTTP error response construction so every endpoint maps the
//! service error taxonomy the same way: unauthenticated (401), forbidden
//! (403), not found (404), validation failure (400 with the full problem
//! list), store rejection (400), and internal failure (500).
//!
//! # Key invariants and assumptions
//! - Error responses carry a stable `code` and a human-readable `message`
//!   (or a `{field, message}` problem list for validation failures).
//! - Status codes must align with the error category; handlers never build
//!   ad-hoc error responses.
//!
//! # Security considerations
//! - Internal errors log details server-side but return generic messages.
//! - Authentication failures never reveal whether a token was malformed or
//!   merely expired, and login failures never reveal username existence.
use crate::api::types::{ErrorResponse, FieldProblem, ValidationErrorResponse};
use crate::store::StoreError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;

/// Structured API error returned by handlers.
///
/// Couples an HTTP status code with a JSON error body so the one type
/// implements `IntoResponse` for every failure shape.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ErrorBody,
}

#[derive(Debug)]
pub enum ErrorBody {
    Message(ErrorResponse),
    Validation(ValidationErrorResponse),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self.body {
            ErrorBody::Message(body) => (self.status, Json(body)).into_response(),
            ErrorBody::Validation(body) => (self.status, Json(body)).into_response(),
        }
    }
}

fn message_error(status: StatusCode, code: &str, message: &str) -> ApiError {
    ApiError {
        status,
        body: ErrorBody::Message(ErrorResponse {
            code: code.to_string(),
            message: message.to_string(),
            request_id: None,
        }),
    }
}

/// Build a 404 Not Found error.
pub fn api_not_found(message: &str) -> ApiError {
    message_error(StatusCode::NOT_FOUND, "not_found", message)
}

/// Build a 401 Unauthorized error.
///
/// Used for every authentication failure: missing, malformed, or expired
/// token, and tokens naming a vanished account.
pub fn api_unauthorized(message: &str) -> ApiError {
    message_error(StatusCode::UNAUTHORIZED, "unauthorized", message)
}

/// Build a 403 Forbidden error.
///
/// Authorization failed despite authentication.
pub fn api_forbidden(message: &str) -> ApiError {
    message_error(StatusCode::FORBIDDEN, "forbidden", message)
}

/// Build a 400 Bad Request from a store-level rejection.
///
/// Distinct from validation: the payload was well-formed but the store
/// refused it (constraint violation).
pub fn api_store_rejected(message: &str) -> ApiError {
    message_error(StatusCode::BAD_REQUEST, "rejected", message)
}

/// Build a 400 Bad Request carrying the accumulated validation problems.
pub fn api_validation_errors(errors: Vec<FieldProblem>) -> ApiError {
    ApiError {
        status: StatusCode::BAD_REQUEST,
        body: ErrorBody::Validation(ValidationErrorResponse {
            code: "validation_error".to_string(),
            errors,
        }),
    }
}

/// Build a 500 Internal Server Error from a store error.
///
/// Logs the store error server-side; the response message stays generic.
pub fn api_internal(message: &str, err: &StoreError) -> ApiError {
    tracing::error!(error = ?err, "catalog storage error");
    message_error(StatusCode::INTERNAL_SERVER_ERROR, "internal", message)
}

/// Build a 500 Internal Server Error without a store error to log.
pub fn api_internal_message(message: &str) -> ApiError {
    message_error(StatusCode::INTERNAL_SERVER_ERROR, "internal", message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_helpers_build_expected_codes() {
        let not_found = api_not_found("missing");
        assert_eq!(not_found.status, StatusCode::NOT_FOUND);
        assert!(matches!(not_found.body, ErrorBody::Message(body) if body.code == "not_found"));

        let unauthorized = api_unauthorized("nope");
        assert_eq!(unauthorized.status, StatusCode::UNAUTHORIZED);
        assert!(
            matches!(unauthorized.body, ErrorBody::Message(body) if body.code == "unauthorized")
        );

        let forbidden = api_forbidden("nope");
        assert_eq!(forbidden.status, StatusCode::FORBIDDEN);
        assert!(matches!(forbidden.body, ErrorBody::Message(body) if body.code == "forbidden"));

        let rejected = api_store_rejected("duplicate");
        assert_eq!(rejected.status, StatusCode::BAD_REQUEST);
        assert!(matches!(rejected.body, ErrorBody::Message(body) if body.code == "rejected"));

        let internal = api_internal_message("oops");
        assert_eq!(internal.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(matches!(internal.body, ErrorBody::Message(body) if body.code == "internal"));
    }

    #[test]
    fn validation_errors_carry_the_full_problem_list() {
        let error = api_validation_errors(vec![
            FieldProblem {
                field: "name".to_string(),
                message: "Model name must not be empty".to_string(),
            },
            FieldProblem {
                field: "access".to_string(),
                message: "Model access must be one of: open, closed, limited".to_string(),
            },
        ]);
        assert_eq!(error.status, StatusCode::BAD_REQUEST);
        let ErrorBody::Validation(body) = error.body else {
            panic!("expected validation body");
        };
        assert_eq!(body.code, "validation_error");
        assert_eq!(body.errors.len(), 2);
        assert!(body.errors.iter().any(|problem| problem.field == "access"));
    }

    #[test]
    fn api_internal_logs_and_wraps_store_error() {
        let err = StoreError::Unexpected(anyhow::anyhow!("boom"));
        let api = api_internal("storage failed", &err);
        assert_eq!(api.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(
            matches!(api.body, ErrorBody::Message(body) if body.message == "storage failed")
        );
    }
}
