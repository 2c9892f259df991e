//! HTTP adapter mapping for domain errors.
//!
//! Keeps the domain error type HTTP-agnostic while turning failures into the
//! JSON envelope the trivia client expects:
//! `{"success": false, "error": <status>, "message": <canonical text>}`.
//! The diagnostic message stays in the logs; clients see only the canonical
//! text for the status plus any structured details.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// Wire format for every error response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ErrorEnvelope {
    /// Always `false`.
    #[schema(example = false)]
    pub success: bool,
    /// HTTP status code, repeated in the body.
    #[schema(example = 404)]
    pub error: u16,
    /// Canonical text for the status.
    #[schema(example = "resource not found")]
    pub message: String,
    /// Correlation identifier matching the `trace-id` header.
    #[serde(rename = "traceId", default, skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<String>,
    /// Structured validation context, never present on internal errors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::Unprocessable => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Short client-facing text for each error code.
pub(crate) fn canonical_message(code: ErrorCode) -> &'static str {
    match code {
        ErrorCode::InvalidRequest => "bad request",
        ErrorCode::NotFound => "resource not found",
        ErrorCode::Unprocessable => "unprocessable",
        ErrorCode::ServiceUnavailable => "service unavailable",
        ErrorCode::InternalError => "internal server error",
    }
}

impl From<&Error> for ErrorEnvelope {
    fn from(error: &Error) -> Self {
        let details = match error.code() {
            ErrorCode::InternalError => None,
            _ => error.details().cloned(),
        };
        Self {
            success: false,
            error: status_for(error.code()).as_u16(),
            message: canonical_message(error.code()).to_owned(),
            trace_id: error.trace_id().map(str::to_owned),
            details,
        }
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            error!(code = ?self.code(), message = self.message(), "request failed");
        } else {
            warn!(code = ?self.code(), message = self.message(), "request rejected");
        }

        let mut builder = HttpResponse::build(status);
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }
        builder.json(ErrorEnvelope::from(self))
    }
}
