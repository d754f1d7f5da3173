use async_trait::async_trait;

use crate::error::Result;

/// Status line and body of an HTTP response, before any decoding.
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, status_text: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            status,
            status_text: status_text.into(),
            body: body.into(),
        }
    }

    pub fn ok(body: impl Into<String>) -> Self {
        Self::new(200, "OK", body)
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Issues a GET for a fully built URL.
///
/// Implementations map connection-level failures to [`crate::ApiError::Network`]
/// and return every HTTP response, successful or not, as a [`RawResponse`].
/// Futures are not required to be `Send` so browser fetches can implement it.
#[async_trait(?Send)]
pub trait Transport {
    async fn get(&self, url: &str) -> Result<RawResponse>;
}
