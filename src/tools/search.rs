//! `kagi_search_fetch`: concurrent multi-query search
//!
//! All queries of one call are issued at once, each bounded by the search
//! timeout. The batch fails as a whole on the first error or timeout; no
//! partial report is produced.

use crate::error::{KagiMcpError, KagiMcpResult};
use crate::kagi::{KagiError, SearchResponse};
use crate::tool_span;
use crate::tools::format::format_search_results;
use crate::tools::KagiTools;
use futures::future::try_join_all;
use tracing::{debug, info, warn, Instrument};

/// Validate the query list (pure function)
fn validate_queries(queries: &[String]) -> KagiMcpResult<()> {
    if queries.is_empty() {
        return Err(KagiMcpError::invalid_input("Search called with no queries."));
    }
    Ok(())
}

impl KagiTools {
    /// Run every query concurrently and return the responses in query order
    pub async fn search_all(&self, queries: &[String]) -> KagiMcpResult<Vec<SearchResponse>> {
        let timeout = self.search_timeout;

        let calls = queries.iter().map(|query| async move {
            match tokio::time::timeout(timeout, self.client.search(query)).await {
                Ok(Ok(response)) => {
                    debug!(query = %query, entries = response.data.len(), "Search query completed");
                    Ok(response)
                }
                Ok(Err(e)) => {
                    warn!(query = %query, error = %e, "Search query failed");
                    Err(KagiMcpError::from(e))
                }
                Err(_) => {
                    warn!(query = %query, timeout_secs = timeout.as_secs_f64(), "Search query timed out");
                    Err(KagiMcpError::from(KagiError::Timeout(format!(
                        "search for \"{query}\" exceeded {}s",
                        timeout.as_secs_f64()
                    ))))
                }
            }
        });

        try_join_all(calls).await
    }

    /// Search for every query and format one continuously numbered report
    pub async fn search_fetch(&self, queries: &[String]) -> KagiMcpResult<String> {
        validate_queries(queries)?;

        let responses = self.search_all(queries).await?;
        Ok(format_search_results(queries, &responses))
    }

    /// Text form of [`KagiTools::search_fetch`]; failures become `Error: ...`
    pub async fn kagi_search_fetch(&self, queries: &[String]) -> String {
        let span = tool_span!(tool = "kagi_search_fetch", query_count = queries.len());

        async {
            match self.search_fetch(queries).await {
                Ok(report) => {
                    info!(bytes = report.len(), "Search completed");
                    report
                }
                Err(e) => {
                    warn!(error = %e, "Search failed");
                    e.to_tool_text()
                }
            }
        }
        .instrument(span)
        .await
    }
}
