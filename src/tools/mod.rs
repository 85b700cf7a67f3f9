//! Kagi tool handlers
//!
//! [`KagiTools`] implements the two operations exposed to agents. Each has a
//! typed form returning [`KagiMcpResult`] and a text form that never fails,
//! which is what the MCP server hands back to the host.

use crate::kagi::KagiApi;
use std::sync::Arc;
use std::time::Duration;

pub mod format;
pub mod search;
pub mod summarizer;

pub use format::{build_report, format_search_results, NumberedResult, QuerySection, SearchReport};

/// Per-query timeout for search fan-out
pub const SEARCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Handlers for `kagi_search_fetch` and `kagi_summarizer`
///
/// Cheap to clone; all clones share one API client.
#[derive(Clone)]
pub struct KagiTools {
    client: Arc<dyn KagiApi>,
    engine: String,
    search_timeout: Duration,
}

impl KagiTools {
    /// Create handlers over `client` with the configured summarizer engine name
    pub fn new(client: Arc<dyn KagiApi>, engine: impl Into<String>) -> Self {
        Self {
            client,
            engine: engine.into(),
            search_timeout: SEARCH_TIMEOUT,
        }
    }

    /// Override the per-query search timeout
    pub fn with_search_timeout(mut self, timeout: Duration) -> Self {
        self.search_timeout = timeout;
        self
    }

    /// Configured engine name, as read from configuration (possibly invalid)
    pub fn engine_name(&self) -> &str {
        &self.engine
    }

    pub fn search_timeout(&self) -> Duration {
        self.search_timeout
    }
}
