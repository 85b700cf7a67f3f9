//! Kagi API abstraction
//!
//! The tool handlers only ever talk to the [`KagiApi`] trait. [`KagiClient`]
//! is the HTTP implementation; tests substitute a scripted mock.

use async_trait::async_trait;
use thiserror::Error;

pub mod client;
pub mod types;

pub use client::{KagiClient, KagiClientConfig};
pub use types::{
    SearchEntry, SearchResponse, SummarizeRequest, SummarizeResponse, SummarizerEngine,
    SummaryType,
};

/// Remote search and summarization operations
///
/// Implementations must be safe to share between concurrently running tool
/// calls; the handlers hold a single instance behind an `Arc`.
#[async_trait]
pub trait KagiApi: Send + Sync {
    /// Run one web search query
    async fn search(&self, query: &str) -> Result<SearchResponse, KagiError>;

    /// Summarize the document at `request.url`
    async fn summarize(&self, request: &SummarizeRequest) -> Result<SummarizeResponse, KagiError>;
}

/// Errors raised while talking to the Kagi API
#[derive(Debug, Clone, Error)]
pub enum KagiError {
    #[error("Kagi client not configured: {0}")]
    NotConfigured(String),
    #[error("Request failed: {0}")]
    Network(String),
    #[error("Request timed out: {0}")]
    Timeout(String),
    #[error("Kagi API error ({status}): {message}")]
    Api { status: u16, message: String },
    #[error("Failed to parse response: {0}")]
    Decode(String),
}
