//! Search result formatting
//!
//! Turns the raw per-query responses into one report that reads well for
//! both a language model and a human skimming a transcript. Results are
//! numbered with a single counter that runs across every query, so a result
//! can be referred to by number regardless of which query produced it.

use crate::kagi::{SearchEntry, SearchResponse};
use std::fmt;

/// Shown in place of a missing publication date
pub const PUBLISHED_UNAVAILABLE: &str = "Not Available";

/// One organic result with its display number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberedResult {
    pub number: usize,
    pub title: String,
    pub url: String,
    pub published: Option<String>,
    pub snippet: String,
}

impl NumberedResult {
    fn from_entry(number: usize, entry: &SearchEntry) -> Self {
        Self {
            number,
            title: entry.title.clone().unwrap_or_default(),
            url: entry.url.clone().unwrap_or_default(),
            published: entry.published.clone(),
            snippet: entry.snippet.clone().unwrap_or_default(),
        }
    }
}

impl fmt::Display for NumberedResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}\n{}\nPublished Date: {}\n{}",
            self.number,
            self.title,
            self.url,
            self.published.as_deref().unwrap_or(PUBLISHED_UNAVAILABLE),
            self.snippet
        )
    }
}

/// Results surfaced for one query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuerySection {
    pub query: String,
    pub results: Vec<NumberedResult>,
}

impl fmt::Display for QuerySection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "-----\nResults for search query \"{}\":\n-----\n",
            self.query
        )?;

        for (i, result) in self.results.iter().enumerate() {
            if i > 0 {
                f.write_str("\n\n")?;
            }
            write!(f, "{result}")?;
        }

        Ok(())
    }
}

/// The complete multi-query report
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchReport {
    pub sections: Vec<QuerySection>,
}

impl SearchReport {
    /// Every numbered result in display order
    pub fn results(&self) -> impl Iterator<Item = &NumberedResult> {
        self.sections.iter().flat_map(|section| section.results.iter())
    }
}

impl fmt::Display for SearchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, section) in self.sections.iter().enumerate() {
            if i > 0 {
                f.write_str("\n\n")?;
            }
            write!(f, "{section}")?;
        }
        Ok(())
    }
}

/// Build the report for queries and their responses, paired in order
///
/// Related-search entries are dropped. Numbering starts at 1 and continues
/// from one query's section into the next.
pub fn build_report<Q: AsRef<str>>(queries: &[Q], responses: &[SearchResponse]) -> SearchReport {
    let mut next_number = 1;
    let mut sections = Vec::with_capacity(queries.len());

    for (query, response) in queries.iter().zip(responses) {
        let mut results = Vec::new();
        for entry in response.organic_results() {
            results.push(NumberedResult::from_entry(next_number, entry));
            next_number += 1;
        }

        sections.push(QuerySection {
            query: query.as_ref().to_string(),
            results,
        });
    }

    SearchReport { sections }
}

/// Render the final text returned by the search tool
pub fn format_search_results<Q: AsRef<str>>(queries: &[Q], responses: &[SearchResponse]) -> String {
    build_report(queries, responses).to_string()
}
