//! Error types for the Kagi tool handlers
//!
//! Handlers return [`KagiMcpError`] internally. At the tool boundary every
//! error is flattened into a single `Error: <description>` line, since the
//! calling agent expects text back whatever the outcome.

use crate::kagi::KagiError;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Prefix of every failed tool response
pub const ERROR_PREFIX: &str = "Error: ";

const MAX_ERROR_LEN: usize = 500;

// Credential schemes after an Authorization label are always redacted
static AUTH_HEADER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(authorization)\b\s*[:=]?\s*(?:Bot|Bearer)\s+\S+")
        .expect("auth header pattern is a valid regex")
});

// Labelled values only count as secrets when they contain a digit, '_' or '-'
static SECRET_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(password|token|api[_-]?key|secret|authorization)\b\s*[:=]\s*[\w.~+/=-]*[\d_-][\w.~+/=-]*",
    )
    .expect("secret pattern is a valid regex")
});

/// Main error type for tool handler operations
#[derive(Debug, Error)]
pub enum KagiMcpError {
    #[error("{message}")]
    InvalidInput { message: String },

    #[error("{message}")]
    InvalidConfiguration { message: String },

    #[error("{0}")]
    RemoteFailure(#[from] KagiError),

    #[error("{message}")]
    Unknown { message: String },
}

impl KagiMcpError {
    /// Create invalid input error
    pub fn invalid_input<S: Into<String>>(message: S) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Create invalid configuration error
    pub fn invalid_configuration<S: Into<String>>(message: S) -> Self {
        Self::InvalidConfiguration {
            message: message.into(),
        }
    }

    /// Create unknown error
    pub fn unknown<S: Into<String>>(message: S) -> Self {
        Self::Unknown {
            message: message.into(),
        }
    }

    /// Render the error as the text returned to the calling agent
    pub fn to_tool_text(&self) -> String {
        let description = self.to_string();
        let description = if description.trim().is_empty() {
            format!("{self:?}")
        } else {
            description
        };
        format!("{ERROR_PREFIX}{}", sanitize_error_message(&description))
    }
}

/// Flatten an error message onto one line with secrets redacted
fn sanitize_error_message(message: &str) -> String {
    let single_line = message.split_whitespace().collect::<Vec<_>>().join(" ");

    let redacted = AUTH_HEADER_PATTERN.replace_all(&single_line, "${1}=***");
    let mut sanitized = SECRET_PATTERN
        .replace_all(&redacted, "${1}=***")
        .to_string();

    if sanitized.len() > MAX_ERROR_LEN {
        let truncate_suffix = "...[truncated]";
        let mut cut = MAX_ERROR_LEN - truncate_suffix.len();
        while !sanitized.is_char_boundary(cut) {
            cut -= 1;
        }
        sanitized = format!("{}{}", &sanitized[..cut], truncate_suffix);
    }

    sanitized
}

/// Result type for tool handler operations
pub type KagiMcpResult<T> = Result<T, KagiMcpError>;
