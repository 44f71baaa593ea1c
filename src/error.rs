use std::fmt;

use thiserror::Error;

/// How the remote API rejected a request.
///
/// An invalid or expired access token always classifies as `BadRequest`,
/// so callers can tell "fix your credentials" apart from a transport
/// problem or a broken server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    BadRequest,
    NotFound,
    RateLimited,
    ServerError,
    Unknown,
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ApiErrorKind::BadRequest => "bad request",
            ApiErrorKind::NotFound => "not found",
            ApiErrorKind::RateLimited => "rate limited",
            ApiErrorKind::ServerError => "server error",
            ApiErrorKind::Unknown => "unknown",
        };
        f.write_str(s)
    }
}

#[derive(Error, Debug)]
pub enum InstagramError {
    /// Connection-level failure (DNS, timeout, TLS) before a response
    /// was captured.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The remote service rejected the request.
    #[error("API error ({kind}, status {status}): {message}")]
    Api {
        kind: ApiErrorKind,
        status: u16,
        message: String,
    },

    /// The response did not match the expected shape. A client/server
    /// contract violation, not a rejected request.
    #[error("decode error: {0}")]
    Decode(String),

    /// Local misconfiguration, reported before any network call.
    #[error("validation error: {0}")]
    Validation(String),
}

impl InstagramError {
    /// The API error kind, if this is an `Api` error.
    pub fn api_kind(&self) -> Option<ApiErrorKind> {
        match self {
            InstagramError::Api { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    /// A cursor was handed to the continuation operation of an endpoint
    /// that did not mint it. Rejected without touching the network.
    pub(crate) fn cursor_mismatch(operation: &str, minted_by: &str) -> Self {
        InstagramError::Api {
            kind: ApiErrorKind::BadRequest,
            status: 400,
            message: format!(
                "cursor minted by the {minted_by} endpoint cannot continue {operation}"
            ),
        }
    }
}

pub type Result<T> = std::result::Result<T, InstagramError>;
