use async_trait::async_trait;
use client::{ApiClient, ApiError, RawResponse, Transport};
use gloo_net::http::Request;

use crate::settings;

/// Browser `fetch` transport.
pub struct GlooTransport;

#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn get(&self, url: &str) -> Result<RawResponse, ApiError> {
        let response = Request::get(url).send().await.map_err(|e| {
            let error_msg = format!("Request failed: {}", e);
            log::error!("GET {} - {}", url, error_msg);
            ApiError::Network(error_msg)
        })?;

        let status = response.status();
        let status_text = response.status_text();

        let body = match response.text().await {
            Ok(body) => body,
            // The error path falls back to the status line anyway
            Err(_) if !response.ok() => String::new(),
            Err(e) => {
                let error_msg = format!("Failed to read response body: {}", e);
                log::error!("GET {} - {}", url, error_msg);
                return Err(ApiError::Network(error_msg));
            }
        };

        Ok(RawResponse {
            status,
            status_text,
            body,
        })
    }
}

/// Client configured from the current settings.
pub fn dashboard_client() -> ApiClient<GlooTransport> {
    ApiClient::new(settings::get_settings().api_config(), GlooTransport)
}
