//! Adapter error kinds and error value helpers.
//!
//! ```rust
//! use wclaude::{ClaudeError, ClaudeErrorKind};
//!
//! let upstream = ClaudeError::upstream(429, "overloaded");
//! assert_eq!(upstream.kind, ClaudeErrorKind::Upstream);
//! assert_eq!(upstream.status, Some(429));
//!
//! let timeout = ClaudeError::timeout("request timed out");
//! assert_eq!(timeout.status, None);
//! ```

use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClaudeErrorKind {
    InvalidRequest,
    Timeout,
    Transport,
    Upstream,
    MalformedResponse,
}

/// A failed Messages API call. `status` and `body` are populated for the
/// kinds that have an HTTP exchange to report on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaudeError {
    pub kind: ClaudeErrorKind,
    pub message: String,
    pub status: Option<u16>,
    pub body: Option<String>,
}

impl ClaudeError {
    pub fn new(kind: ClaudeErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            status: None,
            body: None,
        }
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ClaudeErrorKind::InvalidRequest, message)
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new(ClaudeErrorKind::Timeout, message)
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(ClaudeErrorKind::Transport, message)
    }

    pub fn upstream(status: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        Self {
            kind: ClaudeErrorKind::Upstream,
            message: format!("API request failed ({status}): {body}"),
            status: Some(status),
            body: Some(body),
        }
    }

    pub fn malformed_response(raw_body: impl Into<String>) -> Self {
        Self {
            kind: ClaudeErrorKind::MalformedResponse,
            message: "Unexpected API response structure".to_string(),
            status: None,
            body: Some(raw_body.into()),
        }
    }
}

impl Display for ClaudeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl Error for ClaudeError {}
