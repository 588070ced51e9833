//! Actix response mapping for the domain [`Error`].
//!
//! Status codes come from a fixed table keyed by [`ErrorCode`]. The JSON body
//! is the serialised error itself, so 500 responses keep the underlying
//! `error` text, and the trace identifier is echoed in the `trace-id` header.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

const fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(trace_id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, trace_id.to_owned()));
        }
        builder.json(self)
    }
}
