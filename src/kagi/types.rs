//! Kagi API wire types
//!
//! Request and response shapes for the `/search` and `/summarize` endpoints.
//! Search entries are tagged by the integer field `t`: `0` is a search result,
//! `1` is a block of related-search suggestions.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Discriminator value of an organic search result
pub const ORGANIC_RESULT: u8 = 0;

/// Discriminator value of a related-searches entry
pub const RELATED_SEARCHES: u8 = 1;

/// Request metadata returned with every Kagi response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseMeta {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub node: Option<String>,
    #[serde(default)]
    pub ms: Option<u64>,
    #[serde(default)]
    pub api_balance: Option<f64>,
}

/// One entry of a search response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchEntry {
    /// Entry type discriminator
    pub t: u8,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub snippet: Option<String>,
    /// Publication timestamp, absent for many pages
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published: Option<String>,
    /// Suggested queries, only present on related-search entries
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list: Option<Vec<String>>,
}

impl SearchEntry {
    /// Build an organic result entry
    pub fn organic(title: &str, url: &str, snippet: &str, published: Option<&str>) -> Self {
        Self {
            t: ORGANIC_RESULT,
            url: Some(url.to_string()),
            title: Some(title.to_string()),
            snippet: Some(snippet.to_string()),
            published: published.map(str::to_string),
            list: None,
        }
    }

    /// Build a related-searches entry
    pub fn related<I, S>(suggestions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            t: RELATED_SEARCHES,
            url: None,
            title: None,
            snippet: None,
            published: None,
            list: Some(suggestions.into_iter().map(Into::into).collect()),
        }
    }

    pub fn is_organic(&self) -> bool {
        self.t == ORGANIC_RESULT
    }
}

/// Response of `GET /search`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub meta: ResponseMeta,
    #[serde(default)]
    pub data: Vec<SearchEntry>,
}

impl SearchResponse {
    pub fn new(data: Vec<SearchEntry>) -> Self {
        Self {
            meta: ResponseMeta::default(),
            data,
        }
    }

    /// Organic results in response order
    pub fn organic_results(&self) -> impl Iterator<Item = &SearchEntry> {
        self.data.iter().filter(|entry| entry.is_organic())
    }
}

/// Style of summary produced by the summarizer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SummaryType {
    /// Paragraph prose
    #[default]
    Summary,
    /// Bulleted list of key points
    Takeaway,
}

impl SummaryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SummaryType::Summary => "summary",
            SummaryType::Takeaway => "takeaway",
        }
    }
}

impl fmt::Display for SummaryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SummaryType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "summary" => Ok(SummaryType::Summary),
            "takeaway" => Ok(SummaryType::Takeaway),
            other => Err(format!(
                "invalid summary type: {other}. Must be one of: summary, takeaway"
            )),
        }
    }
}

/// Summarization engines accepted by the Kagi Summarizer API
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummarizerEngine {
    #[default]
    Cecil,
    Agnes,
    Daphne,
    Muriel,
}

impl SummarizerEngine {
    pub const ALL: [SummarizerEngine; 4] = [
        SummarizerEngine::Cecil,
        SummarizerEngine::Agnes,
        SummarizerEngine::Daphne,
        SummarizerEngine::Muriel,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SummarizerEngine::Cecil => "cecil",
            SummarizerEngine::Agnes => "agnes",
            SummarizerEngine::Daphne => "daphne",
            SummarizerEngine::Muriel => "muriel",
        }
    }

    /// Comma-separated list of every valid engine name
    pub fn valid_names() -> String {
        Self::ALL
            .iter()
            .map(SummarizerEngine::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for SummarizerEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SummarizerEngine {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|engine| engine.as_str() == s)
            .ok_or_else(|| {
                format!(
                    "invalid summarization engine set: {s}. Must be one of the following: {}",
                    Self::valid_names()
                )
            })
    }
}

/// Body of `POST /summarize`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummarizeRequest {
    pub url: String,
    pub engine: SummarizerEngine,
    pub summary_type: SummaryType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_language: Option<String>,
}

/// Payload of a summarizer response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryData {
    pub output: String,
    #[serde(default)]
    pub tokens: Option<u64>,
}

/// Response of `POST /summarize`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SummarizeResponse {
    #[serde(default)]
    pub meta: ResponseMeta,
    pub data: SummaryData,
}

impl SummarizeResponse {
    pub fn new(output: impl Into<String>) -> Self {
        Self {
            meta: ResponseMeta::default(),
            data: SummaryData {
                output: output.into(),
                tokens: None,
            },
        }
    }
}

/// Error object returned in the `error` array of a failed request
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiErrorDetail {
    #[serde(default)]
    pub code: Option<i64>,
    #[serde(default)]
    pub msg: Option<String>,
}

/// Envelope used to pull error details out of any response body
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorEnvelope {
    #[serde(default)]
    pub error: Option<Vec<ApiErrorDetail>>,
}

impl ApiErrorEnvelope {
    /// First error message carried by the envelope, if any
    pub fn first_message(&self) -> Option<String> {
        self.error
            .as_ref()?
            .iter()
            .find_map(|detail| detail.msg.clone())
    }
}
