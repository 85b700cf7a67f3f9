//! Testing utilities and mock implementations
//!
//! Lets the tool handlers and MCP server be tested without a Kagi API key.

pub mod mocks;

pub use mocks::*;
