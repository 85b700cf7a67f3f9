//! Observability for the Kagi MCP server
//!
//! Structured logging only. Every log line goes to stderr because stdout
//! carries the MCP message stream.

pub mod logging;

pub use logging::{init_logging, LogFormat, LogSettings};

// Span macros for structured logging
pub use logging::tool_span;
