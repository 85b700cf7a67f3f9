//! Summarizer tool behavior tests

use kagimcp::kagi::{KagiError, SummarizeResponse, SummarizerEngine, SummaryType};
use kagimcp::testing::MockKagiApi;
use kagimcp::tools::KagiTools;
use std::sync::Arc;

#[tokio::test]
async fn test_defaults_to_summary_type_and_inferred_language() {
    let mock = Arc::new(MockKagiApi::new());
    let tools = KagiTools::new(mock.clone(), "cecil");

    let text = tools
        .kagi_summarizer("https://example.com/paper.pdf", None, None)
        .await;

    assert_eq!(text, "Summary of https://example.com/paper.pdf");

    let calls = mock.summarize_calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].engine, SummarizerEngine::Cecil);
    assert_eq!(calls[0].summary_type, SummaryType::Summary);
    assert!(calls[0].target_language.is_none());
}

#[tokio::test]
async fn test_each_allowed_engine_is_accepted() {
    for engine in ["cecil", "agnes", "daphne", "muriel"] {
        let mock = Arc::new(MockKagiApi::new());
        let tools = KagiTools::new(mock.clone(), engine);

        let text = tools
            .kagi_summarizer("https://example.com", None, None)
            .await;

        assert!(!text.starts_with("Error: "), "engine {engine} rejected: {text}");
        assert_eq!(mock.summarize_calls()[0].engine.as_str(), engine);
    }
}

#[tokio::test]
async fn test_unrecognized_engine_names_engine_and_valid_set() {
    let mock = Arc::new(MockKagiApi::new());
    let tools = KagiTools::new(mock.clone(), "claude");

    let text = tools
        .kagi_summarizer("https://example.com", Some(SummaryType::Takeaway), None)
        .await;

    assert_eq!(
        text,
        "Error: Summarizer configured incorrectly, invalid summarization engine set: claude. Must be one of the following: cecil, agnes, daphne, muriel"
    );
    assert!(mock.summarize_calls().is_empty());
}

#[tokio::test]
async fn test_empty_url_yields_error_text() {
    let tools = KagiTools::new(Arc::new(MockKagiApi::new()), "cecil");

    let text = tools.kagi_summarizer("   ", None, None).await;

    assert_eq!(text, "Error: Summarizer called with no URL.");
}

#[tokio::test]
async fn test_output_is_verbatim() {
    let output = "## Key points\n\n* one\n* two\n";
    let mock = MockKagiApi::new().with_summary_response(SummarizeResponse::new(output));
    let tools = KagiTools::new(Arc::new(mock), "cecil");

    let text = tools
        .kagi_summarizer("https://example.com", Some(SummaryType::Takeaway), Some("EN".to_string()))
        .await;

    assert_eq!(text, output);
}

#[tokio::test]
async fn test_remote_error_becomes_single_line() {
    let mock = MockKagiApi::new().with_summary_error(KagiError::Api {
        status: 500,
        message: "internal\nserver error".to_string(),
    });
    let tools = KagiTools::new(Arc::new(mock), "cecil");

    let text = tools
        .kagi_summarizer("https://example.com", None, None)
        .await;

    assert_eq!(text, "Error: Kagi API error (500): internal server error");
    assert!(!text.contains('\n'));
}
