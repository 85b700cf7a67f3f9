//! Mock implementations for testing
//!
//! [`MockKagiApi`] stands in for the Kagi API so tool handlers and the MCP
//! server can be exercised without network access or an API key.

use crate::kagi::{
    KagiApi, KagiError, SearchResponse, SummarizeRequest, SummarizeResponse,
};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

/// Scripted Kagi API
///
/// Search behaviour is keyed by query text. Queries with nothing scripted
/// return an empty response. Every call is recorded.
#[derive(Debug, Default)]
pub struct MockKagiApi {
    search_responses: HashMap<String, SearchResponse>,
    search_errors: HashMap<String, KagiError>,
    search_delays: HashMap<String, Duration>,
    summary: Option<Result<SummarizeResponse, KagiError>>,
    search_calls: Mutex<Vec<String>>,
    summarize_calls: Mutex<Vec<SummarizeRequest>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl MockKagiApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search_response(mut self, query: &str, response: SearchResponse) -> Self {
        self.search_responses.insert(query.to_string(), response);
        self
    }

    pub fn with_search_error(mut self, query: &str, error: KagiError) -> Self {
        self.search_errors.insert(query.to_string(), error);
        self
    }

    /// Delay the answer to `query`, e.g. to trigger the search timeout
    pub fn with_search_delay(mut self, query: &str, delay: Duration) -> Self {
        self.search_delays.insert(query.to_string(), delay);
        self
    }

    pub fn with_summary_response(mut self, response: SummarizeResponse) -> Self {
        self.summary = Some(Ok(response));
        self
    }

    pub fn with_summary_error(mut self, error: KagiError) -> Self {
        self.summary = Some(Err(error));
        self
    }

    /// Queries searched so far, in call order
    pub fn search_calls(&self) -> Vec<String> {
        lock(&self.search_calls).clone()
    }

    /// Summarize requests received so far
    pub fn summarize_calls(&self) -> Vec<SummarizeRequest> {
        lock(&self.summarize_calls).clone()
    }
}

#[async_trait]
impl KagiApi for MockKagiApi {
    async fn search(&self, query: &str) -> Result<SearchResponse, KagiError> {
        lock(&self.search_calls).push(query.to_string());

        if let Some(delay) = self.search_delays.get(query) {
            tokio::time::sleep(*delay).await;
        }

        if let Some(error) = self.search_errors.get(query) {
            return Err(error.clone());
        }

        Ok(self
            .search_responses
            .get(query)
            .cloned()
            .unwrap_or_default())
    }

    async fn summarize(&self, request: &SummarizeRequest) -> Result<SummarizeResponse, KagiError> {
        lock(&self.summarize_calls).push(request.clone());

        match &self.summary {
            Some(result) => result.clone(),
            None => Ok(SummarizeResponse::new(format!("Summary of {}", request.url))),
        }
    }
}
