//! Domain-level error payload.
//!
//! The type is transport agnostic. The HTTP adapter maps [`ErrorCode`] to a
//! status code and serialises the payload as the response body.

use serde::{Deserialize, Serialize};

use super::TraceId;

/// Stable machine-readable error code describing the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The request is malformed or fails validation.
    InvalidRequest,
    /// The requested resource does not exist.
    NotFound,
    /// An unexpected error occurred inside the service or a dependency.
    InternalError,
}

/// Error payload returned to clients.
///
/// `message` is safe to show to users. `error` optionally carries the text of
/// the underlying failure for server-side errors.
///
/// # Examples
/// ```
/// use weather_backend::domain::{Error, ErrorCode};
///
/// let err = Error::not_found("missing");
/// assert_eq!(err.code(), ErrorCode::NotFound);
/// assert!(err.error().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Error {
    code: ErrorCode,
    message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(alias = "trace_id")]
    trace_id: Option<String>,
}

impl Error {
    /// Create a new error.
    ///
    /// Captures the current trace identifier if one is in scope so the
    /// payload is correlated with request logs automatically.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            error: None,
            trace_id: TraceId::current().map(|id| id.to_string()),
        }
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message returned to clients.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Text of the underlying failure, if attached.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Correlation identifier captured when the error was created.
    pub fn trace_id(&self) -> Option<&str> {
        self.trace_id.as_deref()
    }

    /// Attach the text of the underlying failure.
    ///
    /// # Examples
    /// ```
    /// use weather_backend::domain::Error;
    ///
    /// let err = Error::internal("Internal server error").with_error("pool timed out");
    /// assert_eq!(err.error(), Some("pool timed out"));
    /// ```
    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    /// Attach a trace identifier to the error.
    pub fn with_trace_id(mut self, id: impl Into<String>) -> Self {
        self.trace_id = Some(id.into());
        self
    }

    /// Convenience constructor for [`ErrorCode::InvalidRequest`].
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// Convenience constructor for [`ErrorCode::NotFound`].
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// Convenience constructor for [`ErrorCode::InternalError`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.error {
            Some(error) => write!(f, "{}: {error}", self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    //! Regression coverage for the error payload shape.
    use super::*;
    use rstest::rstest;
    use serde_json::{Value, json};

    #[rstest]
    fn serialises_without_optional_fields() {
        let err = Error::not_found("missing");
        let value = serde_json::to_value(&err).expect("serialise error");
        assert_eq!(value, json!({ "code": "not_found", "message": "missing" }));
    }

    #[rstest]
    fn serialises_underlying_error_and_trace_id_in_camel_case() {
        let err = Error::internal("Internal server error")
            .with_error("connection reset")
            .with_trace_id("abc");
        let value = serde_json::to_value(&err).expect("serialise error");
        assert_eq!(
            value.get("error").and_then(Value::as_str),
            Some("connection reset")
        );
        assert_eq!(value.get("traceId").and_then(Value::as_str), Some("abc"));
        assert_eq!(
            value.get("code").and_then(Value::as_str),
            Some("internal_error")
        );
    }

    #[rstest]
    fn display_includes_underlying_error() {
        let err = Error::internal("lookup failed").with_error("timeout");
        assert_eq!(err.to_string(), "lookup failed: timeout");
    }

    #[tokio::test]
    async fn captures_trace_id_in_scope() {
        let trace_id: TraceId = "00000000-0000-0000-0000-000000000001"
            .parse()
            .expect("valid UUID");
        let err = TraceId::scope(trace_id, async { Error::invalid_request("bad") }).await;
        assert_eq!(err.trace_id(), Some("00000000-0000-0000-0000-000000000001"));
    }
}
