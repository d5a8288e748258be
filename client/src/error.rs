use reqwest::StatusCode;
use thiserror::Error;

/// Failure taxonomy surfaced to callers of the client.
///
/// The client never swallows a failure: every request either resolves with
/// its (possibly replayed) response or rejects with one of these kinds.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Rejected with 401 while no refresh was attempted or possible.
    #[error("request was rejected as unauthorized")]
    Unauthorized,

    /// Refresh was attempted and failed, or a replayed request failed again.
    /// The caller should force re-authentication.
    #[error("session expired, re-authentication required")]
    SessionExpired,

    /// The request could not reach the server at all.
    #[error("failed to reach the server")]
    NetworkFailure(#[source] reqwest::Error),

    /// Any other non-2xx status, passed through with status and body intact.
    #[error("server returned {status}")]
    ServerError { status: StatusCode, body: String },

    /// The response arrived but its body could not be decoded.
    #[error("failed to decode response body")]
    Decode(#[source] reqwest::Error),
}

impl ApiError {
    /// Maps a transport-level `reqwest` error onto the taxonomy.
    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err)
        } else {
            ApiError::NetworkFailure(err)
        }
    }

    pub fn is_auth_failure(&self) -> bool {
        matches!(self, ApiError::Unauthorized | ApiError::SessionExpired)
    }
}
