use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

use crate::config::AppConfig;
use crate::errors::HotListError;

/// Source of the raw upstream page.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self) -> Result<String, HotListError>;
}

pub struct KuaishouApi {
    client: Client,
    url: String,
}

impl KuaishouApi {
    pub fn new(config: &AppConfig) -> Result<Self, HotListError> {
        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| HotListError::Network(e.to_string()))?;

        Ok(Self {
            client,
            url: config.upstream_url.clone(),
        })
    }
}

#[async_trait]
impl PageFetcher for KuaishouApi {
    async fn fetch(&self) -> Result<String, HotListError> {
        debug!("Sending request to {}", self.url);
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| HotListError::Network(e.to_string()))?;

        let body = response
            .text()
            .await
            .map_err(|e| HotListError::Network(e.to_string()))?;
        debug!("Received {} bytes from {}", body.len(), self.url);

        Ok(body)
    }
}
