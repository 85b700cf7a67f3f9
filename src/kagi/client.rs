//! HTTP client for the Kagi API
//!
//! Both endpoints authenticate with an `Authorization: Bot <key>` header.
//! Failed requests carry an `error` array in the body; its first message is
//! surfaced in [`KagiError::Api`].

use crate::kagi::types::{ApiErrorEnvelope, SearchResponse, SummarizeRequest, SummarizeResponse};
use crate::kagi::{KagiApi, KagiError};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "https://kagi.com/api/v0";

/// Kagi client configuration
#[derive(Debug, Clone)]
pub struct KagiClientConfig {
    pub api_key: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for KagiClientConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// Kagi API client
pub struct KagiClient {
    config: KagiClientConfig,
    client: Client,
}

impl KagiClient {
    /// Create a new Kagi client
    pub fn new(config: KagiClientConfig) -> Result<Self, KagiError> {
        if config.api_key.is_empty() {
            return Err(KagiError::NotConfigured(
                "Kagi API key is required".to_string(),
            ));
        }

        url::Url::parse(&config.base_url)
            .map_err(|e| KagiError::NotConfigured(format!("Invalid base URL: {e}")))?;

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("kagimcp/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| KagiError::Network(e.to_string()))?;

        Ok(Self { config, client })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), path)
    }

    fn auth_header(&self) -> String {
        format!("Bot {}", self.config.api_key)
    }

    /// Turn an HTTP response into a typed body or a descriptive API error
    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, KagiError> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| KagiError::Network(e.to_string()))?;

        let envelope: ApiErrorEnvelope = serde_json::from_str(&body).unwrap_or_default();

        if !status.is_success() {
            let message = envelope.first_message().unwrap_or(body);
            return Err(KagiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        if let Some(message) = envelope.first_message() {
            return Err(KagiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_str(&body).map_err(|e| KagiError::Decode(e.to_string()))
    }
}

#[async_trait]
impl KagiApi for KagiClient {
    async fn search(&self, query: &str) -> Result<SearchResponse, KagiError> {
        debug!(query = %query, "Sending Kagi search request");

        let response = self
            .client
            .get(self.endpoint("search"))
            .header("Authorization", self.auth_header())
            .query(&[("q", query)])
            .send()
            .await
            .map_err(|e| KagiError::Network(e.to_string()))?;

        Self::decode(response).await
    }

    async fn summarize(&self, request: &SummarizeRequest) -> Result<SummarizeResponse, KagiError> {
        debug!(
            url = %request.url,
            engine = %request.engine,
            summary_type = %request.summary_type,
            "Sending Kagi summarize request"
        );

        let response = self
            .client
            .post(self.endpoint("summarize"))
            .header("Authorization", self.auth_header())
            .json(request)
            .send()
            .await
            .map_err(|e| KagiError::Network(e.to_string()))?;

        Self::decode(response).await
    }
}
