use thiserror::Error;

use crate::transport::RawResponse;

/// Failure of a single API call. Any of these fails the whole dashboard batch.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The server answered with a non-2xx status
    #[error("API error {status}: {message}")]
    Status { status: u16, message: String },

    /// The request never produced a response
    #[error("Network error: {0}")]
    Network(String),

    /// A 2xx body did not match the documented response contract
    #[error("Failed to decode response from {path}: {message}")]
    Decode { path: String, message: String },
}

impl ApiError {
    /// Builds the status error for a non-2xx response, preferring the body
    /// text and falling back to the status line when the body is empty.
    pub fn from_response(response: &RawResponse) -> Self {
        let body = response.body.trim();
        let message = if body.is_empty() {
            response.status_text.clone()
        } else {
            body.to_string()
        };

        ApiError::Status {
            status: response.status,
            message,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Type alias for Result with ApiError
pub type Result<T> = std::result::Result<T, ApiError>;
