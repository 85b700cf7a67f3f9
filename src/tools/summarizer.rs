//! `kagi_summarizer`: single-document summarization

use crate::error::{KagiMcpError, KagiMcpResult};
use crate::kagi::{SummarizeRequest, SummarizerEngine, SummaryType};
use crate::tool_span;
use crate::tools::KagiTools;
use tracing::{info, warn, Instrument};

/// Resolve a configured engine name against the allow-list (pure function)
pub fn resolve_engine(name: &str) -> KagiMcpResult<SummarizerEngine> {
    name.parse::<SummarizerEngine>().map_err(|reason| {
        KagiMcpError::invalid_configuration(format!("Summarizer configured incorrectly, {reason}"))
    })
}

/// Validate the URL argument, returning it trimmed (pure function)
fn validate_url(url: &str) -> KagiMcpResult<&str> {
    let url = url.trim();
    if url.is_empty() {
        return Err(KagiMcpError::invalid_input("Summarizer called with no URL."));
    }
    Ok(url)
}

/// Build the API request from tool arguments (pure function)
fn build_request(
    url: &str,
    engine: SummarizerEngine,
    summary_type: Option<SummaryType>,
    target_language: Option<String>,
) -> SummarizeRequest {
    SummarizeRequest {
        url: url.to_string(),
        engine,
        summary_type: summary_type.unwrap_or_default(),
        target_language: target_language
            .map(|lang| lang.trim().to_string())
            .filter(|lang| !lang.is_empty()),
    }
}

impl KagiTools {
    /// Summarize the document at `url` with the configured engine
    pub async fn summarize(
        &self,
        url: &str,
        summary_type: Option<SummaryType>,
        target_language: Option<String>,
    ) -> KagiMcpResult<String> {
        let url = validate_url(url)?;
        let engine = resolve_engine(self.engine_name())?;
        let request = build_request(url, engine, summary_type, target_language);

        let response = self.client.summarize(&request).await?;
        Ok(response.data.output)
    }

    /// Text form of [`KagiTools::summarize`]; failures become `Error: ...`
    pub async fn kagi_summarizer(
        &self,
        url: &str,
        summary_type: Option<SummaryType>,
        target_language: Option<String>,
    ) -> String {
        let span = tool_span!(
            tool = "kagi_summarizer",
            url = %url,
            summary_type = %summary_type.unwrap_or_default()
        );

        async {
            match self.summarize(url, summary_type, target_language).await {
                Ok(output) => {
                    info!(bytes = output.len(), "Summary completed");
                    output
                }
                Err(e) => {
                    warn!(error = %e, "Summary failed");
                    e.to_tool_text()
                }
            }
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kagi::{KagiError, SummarizeResponse};
    use crate::testing::MockKagiApi;
    use std::sync::Arc;

    #[test]
    fn test_resolve_engine() {
        assert_eq!(resolve_engine("daphne").unwrap(), SummarizerEngine::Daphne);

        let err = resolve_engine("gpt").unwrap_err();
        assert!(matches!(err, KagiMcpError::InvalidConfiguration { .. }));
        assert!(err.to_string().contains("gpt"));
    }

    #[test]
    fn test_build_request_defaults() {
        let request = build_request("https://example.com", SummarizerEngine::Cecil, None, None);

        assert_eq!(request.summary_type, SummaryType::Summary);
        assert_eq!(request.target_language, None);
    }

    #[test]
    fn test_build_request_drops_blank_language() {
        let request = build_request(
            "https://example.com",
            SummarizerEngine::Cecil,
            Some(SummaryType::Takeaway),
            Some("  ".to_string()),
        );

        assert_eq!(request.target_language, None);
    }

    #[test]
    fn test_validate_url() {
        assert_eq!(validate_url(" https://example.com ").unwrap(), "https://example.com");
        assert!(matches!(
            validate_url("   "),
            Err(KagiMcpError::InvalidInput { .. })
        ));
    }

    #[tokio::test]
    async fn test_summary_output_returned_verbatim() {
        let output = "  First paragraph.\n\n- point one\n- point two\n";
        let mock = Arc::new(
            MockKagiApi::new().with_summary_response(SummarizeResponse::new(output)),
        );
        let tools = KagiTools::new(mock.clone(), "agnes");

        let text = tools
            .kagi_summarizer(
                "https://example.com/post",
                Some(SummaryType::Takeaway),
                Some("EN".to_string()),
            )
            .await;

        assert_eq!(text, output);

        let calls = mock.summarize_calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].engine, SummarizerEngine::Agnes);
        assert_eq!(calls[0].summary_type, SummaryType::Takeaway);
        assert_eq!(calls[0].target_language.as_deref(), Some("EN"));
    }

    #[tokio::test]
    async fn test_empty_url_checked_before_engine() {
        let mock = Arc::new(MockKagiApi::new());
        let tools = KagiTools::new(mock.clone(), "bogus");

        let text = tools.kagi_summarizer("", None, None).await;

        assert_eq!(text, "Error: Summarizer called with no URL.");
        assert!(mock.summarize_calls().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_engine_yields_error_text() {
        let mock = Arc::new(MockKagiApi::new());
        let tools = KagiTools::new(mock.clone(), "bogus");

        let text = tools
            .kagi_summarizer("https://example.com", None, None)
            .await;

        assert!(text.starts_with("Error: "));
        assert!(text.contains("bogus"));
        assert!(text.contains("cecil, agnes, daphne, muriel"));
        assert!(mock.summarize_calls().is_empty());
    }

    #[tokio::test]
    async fn test_remote_failure_yields_error_text() {
        let mock = MockKagiApi::new().with_summary_error(KagiError::Network(
            "connection refused".to_string(),
        ));
        let tools = KagiTools::new(Arc::new(mock), "cecil");

        let text = tools
            .kagi_summarizer("https://example.com", None, None)
            .await;

        assert_eq!(text, "Error: Request failed: connection refused");
    }
}
