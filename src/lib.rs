//! Kagi MCP server
//!
//! Exposes Kagi web search and the Kagi Universal Summarizer to agent hosts
//! as two MCP tools:
//!
//! - `kagi_search_fetch(queries)` runs every query concurrently and returns
//!   one report whose results are numbered continuously across queries.
//! - `kagi_summarizer(url, summary_type, target_language)` returns the
//!   summary text for one document.
//!
//! Both tools always answer with text. Failures are reported as a single
//! line starting with `Error: `.
//!
//! # Quick Start
//!
//! ```rust
//! use kagimcp::kagi::{SearchEntry, SearchResponse};
//! use kagimcp::tools::format_search_results;
//!
//! let responses = vec![
//!     SearchResponse::new(vec![
//!         SearchEntry::organic("The Book", "https://doc.rust-lang.org/book/", "Learn Rust", None),
//!         SearchEntry::related(["rust borrow checker"]),
//!     ]),
//!     SearchResponse::new(vec![
//!         SearchEntry::organic("Go by Example", "https://gobyexample.com/channels", "Channels", None),
//!     ]),
//! ];
//!
//! let report = format_search_results(&["rust ownership", "go channels"], &responses);
//! assert!(report.contains("1: The Book"));
//! assert!(report.contains("2: Go by Example"));
//! ```

pub mod config;
pub mod error;
pub mod kagi;
pub mod observability;
pub mod server;
pub mod testing;
pub mod tools;

pub use config::{ConfigError, ServerConfig};
pub use error::{KagiMcpError, KagiMcpResult};
pub use kagi::{KagiApi, KagiClient, KagiError};
pub use server::KagiMcpServer;
pub use tools::KagiTools;
