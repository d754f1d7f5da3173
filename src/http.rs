use async_trait::async_trait;
use client::{ApiError, RawResponse, Transport};
use std::time::Duration;
use tracing::{error, trace};

/// `reqwest` transport for the terminal dashboard.
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

#[async_trait(?Send)]
impl Transport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<RawResponse, ApiError> {
        trace!("Sending GET {}", url);
        let response = self.client.get(url).send().await.map_err(|e| {
            let error_msg = format!("Request failed: {}", e);
            error!("GET {} - {}", url, error_msg);
            ApiError::Network(error_msg)
        })?;

        let status = response.status();
        let status_text = status.canonical_reason().unwrap_or_default().to_string();

        let body = match response.text().await {
            Ok(body) => body,
            Err(_) if !status.is_success() => String::new(),
            Err(e) => {
                let error_msg = format!("Failed to read response body: {}", e);
                error!("GET {} - {}", url, error_msg);
                return Err(ApiError::Network(error_msg));
            }
        };

        Ok(RawResponse::new(status.as_u16(), status_text, body))
    }
}
