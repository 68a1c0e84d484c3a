use std::time::Duration;

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when using the BondMCP API client
///
/// Every failed call produces exactly one of these; retryable conditions
/// (transport faults, 429, 5xx) are retried internally and only surfaced
/// once the retry budget is exhausted.
#[derive(Debug, Error)]
pub enum BondError {
    /// Missing or rejected credentials (HTTP 401, or an empty API key)
    #[error("authentication error: {0}")]
    Authentication(String),

    /// Rate limit exceeded (HTTP 429)
    #[error("rate limit error: {message}")]
    RateLimit {
        /// Human-readable error message
        message: String,
        /// Server-supplied wait hint, parsed from the `retry_after` body field
        retry_after: Option<Duration>,
    },

    /// The request itself is malformed (HTTP 422, or a body that failed to serialize)
    #[error("validation error: {message}")]
    Validation {
        /// Human-readable error message
        message: String,
        /// Offending field name, if the server reported one
        field: Option<String>,
    },

    /// Any other non-2xx API response
    #[error("API error ({status}): {message}")]
    Api {
        /// Raw HTTP status code
        status: u16,
        /// Human-readable error message
        message: String,
        /// Whole parsed error body (`Value::Null` if unparseable)
        body: serde_json::Value,
    },

    /// The caller's cancellation token fired while the call was suspended
    #[error("request cancelled")]
    Cancelled,

    /// Network-level failure (connect, DNS, TLS, timeout) that exhausted all retries
    #[error("transport error after {attempts} attempt(s): {source}")]
    Transport {
        /// Total attempts made, including the original try
        attempts: u32,
        /// The last transport error observed
        #[source]
        source: reqwest::Error,
    },

    /// A 2xx response body that could not be decoded into the requested type
    #[error("decode error: {0}")]
    Decode(String),
}

impl BondError {
    /// Determines if this error may succeed on a later attempt
    ///
    /// Retryable: transport failures, 429, and 5xx API errors. Everything
    /// else indicates the request itself is wrong and is surfaced as-is.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::Transport { .. } | Self::RateLimit { .. } => true,
            Self::Api { status, .. } => crate::retry::is_retryable_status(*status),
            Self::Authentication(_)
            | Self::Validation { .. }
            | Self::Cancelled
            | Self::Decode(_) => false,
        }
    }

    /// Returns the server-supplied retry-after hint, if any
    #[must_use]
    pub const fn retry_after(&self) -> Option<Duration> {
        match self {
            Self::RateLimit { retry_after, .. } => *retry_after,
            _ => None,
        }
    }
}

/// Error body shape shared by BondMCP endpoints
///
/// All fields are optional on the wire; absence degrades to defaults.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    field: Option<String>,
    /// Seconds to wait before retrying, sent with 429 responses
    #[serde(default)]
    retry_after: Option<f64>,
}

/// Classifies a non-2xx response into a [`BondError`]
///
/// Pure function of status code and body. An unparseable body never fails
/// classification; the status code alone decides the kind and the message
/// falls back to a generic string.
pub(crate) fn classify(status: StatusCode, body: &[u8]) -> BondError {
    let parsed: ErrorBody = serde_json::from_slice(body).unwrap_or_default();
    let message = parsed
        .message
        .unwrap_or_else(|| "API request failed".to_owned());

    match status.as_u16() {
        401 => BondError::Authentication("invalid API key".to_owned()),
        422 => BondError::Validation {
            message,
            field: parsed.field,
        },
        429 => BondError::RateLimit {
            message,
            retry_after: parsed
                .retry_after
                .filter(|s| s.is_finite() && *s >= 0.0)
                .map(Duration::from_secs_f64),
        },
        code => BondError::Api {
            status: code,
            message,
            body: serde_json::from_slice(body).unwrap_or(serde_json::Value::Null),
        },
    }
}

/// Maps a serde error on a 2xx body to a [`BondError::Decode`] with context
pub(crate) fn map_deser(e: &serde_json::Error, body: &[u8]) -> BondError {
    let snippet = String::from_utf8_lossy(&body[..body.len().min(400)]);
    BondError::Decode(format!("{e}: {snippet}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_401_ignores_body() {
        let err = classify(StatusCode::UNAUTHORIZED, b"{\"message\": \"whatever\"}");
        assert!(matches!(err, BondError::Authentication(_)));
        assert!(!err.is_retryable());

        let err = classify(StatusCode::UNAUTHORIZED, b"not json at all");
        assert!(matches!(err, BondError::Authentication(_)));
    }

    #[test]
    fn classify_422_carries_field() {
        let err = classify(
            StatusCode::UNPROCESSABLE_ENTITY,
            br#"{"message": "prompt is required", "field": "prompt"}"#,
        );
        match err {
            BondError::Validation { message, field } => {
                assert_eq!(message, "prompt is required");
                assert_eq!(field.as_deref(), Some("prompt"));
            }
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn classify_429_parses_retry_after_seconds() {
        let err = classify(StatusCode::TOO_MANY_REQUESTS, br#"{"retry_after": 2}"#);
        assert_eq!(err.retry_after(), Some(Duration::from_secs(2)));
        assert!(err.is_retryable());
    }

    #[test]
    fn classify_429_without_hint() {
        let err = classify(StatusCode::TOO_MANY_REQUESTS, b"{}");
        assert!(matches!(
            err,
            BondError::RateLimit {
                retry_after: None,
                ..
            }
        ));
    }

    #[test]
    fn classify_429_rejects_bogus_hint() {
        let err = classify(StatusCode::TOO_MANY_REQUESTS, br#"{"retry_after": -5}"#);
        assert_eq!(err.retry_after(), None);
    }

    #[test]
    fn classify_other_statuses_keep_raw_body() {
        let err = classify(
            StatusCode::INTERNAL_SERVER_ERROR,
            br#"{"message": "boom", "detail": "db down"}"#,
        );
        match &err {
            BondError::Api {
                status,
                message,
                body,
            } => {
                assert_eq!(*status, 500);
                assert_eq!(message, "boom");
                assert_eq!(body["detail"], "db down");
            }
            other => panic!("expected Api, got {other:?}"),
        }
        assert!(err.is_retryable());

        let err = classify(StatusCode::NOT_FOUND, b"");
        match &err {
            BondError::Api {
                status,
                message,
                body,
            } => {
                assert_eq!(*status, 404);
                assert_eq!(message, "API request failed");
                assert!(body.is_null());
            }
            other => panic!("expected Api, got {other:?}"),
        }
        assert!(!err.is_retryable());
    }

    #[test]
    fn decode_error_snippet_is_capped() {
        let body = vec![b'x'; 2000];
        let e = serde_json::from_slice::<serde_json::Value>(&body).unwrap_err();
        let err = map_deser(&e, &body);
        let msg = err.to_string();
        assert!(msg.len() < 600, "snippet should be capped, got {}", msg.len());
    }
}
