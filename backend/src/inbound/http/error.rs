//! HTTP adapter mapping for domain errors.
//!
//! Keeps [`DomainError`] HTTP-agnostic while letting actix handlers turn
//! failures into consistent JSON envelopes and status codes. Internal
//! failures are redacted in the response but logged with full detail.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use tracing::error;

use crate::domain::{DomainError, ErrorCode};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, DomainError>;

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest | ErrorCode::AlreadyFavorited => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::RemoteApi | ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn redact_if_internal(err: &DomainError) -> DomainError {
    if matches!(err.code(), ErrorCode::InternalError) {
        DomainError::internal("Internal server error")
    } else {
        err.clone()
    }
}

impl ResponseError for DomainError {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        if matches!(self.code(), ErrorCode::InternalError | ErrorCode::RemoteApi) {
            error!(code = ?self.code(), message = %self.message(), details = ?self.details(), "request failed");
        }
        HttpResponse::build(self.status_code()).json(redact_if_internal(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conflict_and_validation_map_to_bad_request() {
        assert_eq!(status_for(ErrorCode::AlreadyFavorited), StatusCode::BAD_REQUEST);
        assert_eq!(status_for(ErrorCode::InvalidRequest), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn missing_records_map_to_not_found() {
        assert_eq!(status_for(ErrorCode::NotFound), StatusCode::NOT_FOUND);
    }

    #[test]
    fn remote_and_internal_failures_map_to_server_error() {
        assert_eq!(
            status_for(ErrorCode::RemoteApi),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status_for(ErrorCode::InternalError),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn internal_messages_are_redacted() {
        let redacted = redact_if_internal(&DomainError::internal("connection refused to 10.0.0.8"));
        assert_eq!(redacted.message(), "Internal server error");

        let passthrough = redact_if_internal(&DomainError::not_found("poi missing"));
        assert_eq!(passthrough.message(), "poi missing");
    }
}
