//! Errors coming back from the books API

use serde::Deserialize;

/// Shown to the user when the server did not tell us what went wrong
pub const FALLBACK_ERROR_MESSAGE: &str = "Something went wrong";

/// What kind of failure an [`ApiError`] is
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorCode {
    /// The request never produced a response (offline, CORS, dns, ...)
    Transport(String),
    /// The server answered with a non-success status
    Status(u16),
    /// The server answered with success, but the body was not what we expected
    Malformed(String),
    /// The id cannot be placed in a request url, nothing was sent
    InvalidId(String),
}

/// A failed call to the books API.
///
/// `message` is only ever set from the server's own error payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub code: ErrorCode,
    pub message: Option<String>,
}

/// The error payload the backend sends along with non-success responses
#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl ApiError {
    pub fn transport(detail: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::Transport(detail.into()),
            message: None,
        }
    }

    pub fn malformed(detail: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::Malformed(detail.into()),
            message: None,
        }
    }

    pub fn invalid_id(id: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::InvalidId(id.into()),
            message: None,
        }
    }

    /// Build the error for a non-success response from its status and raw body
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message);
        Self {
            code: ErrorCode::Status(status),
            message,
        }
    }

    /// The text to show to the user: the server's message, or the generic fallback
    pub fn user_message(&self) -> &str {
        match self.message.as_deref() {
            Some(m) if !m.trim().is_empty() => m,
            _ => FALLBACK_ERROR_MESSAGE,
        }
    }
}
impl core::fmt::Display for ApiError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match &self.code {
            ErrorCode::Transport(e) => {
                write!(f, "Unable to reach the books API: {e}")
            }
            ErrorCode::Status(status) => {
                write!(f, "Books API answered {status}: {}", self.user_message())
            }
            ErrorCode::Malformed(e) => {
                write!(f, "Unable to understand the books API response: {e}")
            }
            ErrorCode::InvalidId(id) => {
                write!(f, "\"{id}\" is not a usable book id")
            }
        }
    }
}
impl std::error::Error for ApiError {}
