use anyhow::{Result, bail};
use client::ApiClient;
use tracing::{debug, error};

use crate::config::CliSettings;
use crate::http::ReqwestTransport;

pub async fn health(settings: &CliSettings) -> Result<()> {
    let transport = ReqwestTransport::new(settings.request_timeout())?;
    let client = ApiClient::new(settings.api_config(), transport);
    debug!(config = ?client.config(), "Checking API health");

    let status = match client.health().await {
        Ok(status) => status,
        Err(e) => {
            error!("Health check failed: {}", e);
            println!("API unreachable: {}", e);
            return Err(e.into());
        }
    };

    println!("API status: {}", status.status);
    if !status.is_ok() {
        bail!("API reported status {:?}", status.status);
    }
    Ok(())
}
