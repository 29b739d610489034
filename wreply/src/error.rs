//! Pipeline error kinds, helpers, and the user-facing message mapping.
//!
//! ```rust
//! use std::time::Duration;
//! use wreply::{GenerationError, GenerationErrorKind};
//!
//! let limited = GenerationError::rate_limited(Duration::from_millis(250));
//! assert_eq!(limited.kind, GenerationErrorKind::RateLimited);
//! assert_eq!(limited.retry_after, Some(Duration::from_millis(250)));
//! ```

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Duration;

use wclaude::{ClaudeError, ClaudeErrorKind};
use wsettings::{MIN_USABLE_EXAMPLES, SettingsError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationErrorKind {
    MissingCredential,
    InsufficientExamples,
    RateLimited,
    Upstream,
    MalformedResponse,
    Timeout,
    Other,
}

/// A failed generation attempt. Every failure is terminal for its
/// invocation; the pipeline never retries on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationError {
    pub kind: GenerationErrorKind,
    pub message: String,
    pub retry_after: Option<Duration>,
    pub status: Option<u16>,
}

impl GenerationError {
    pub fn new(kind: GenerationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            retry_after: None,
            status: None,
        }
    }

    pub fn missing_credential() -> Self {
        Self::new(GenerationErrorKind::MissingCredential, "no API key configured")
    }

    pub fn insufficient_examples(stored: usize) -> Self {
        Self::new(
            GenerationErrorKind::InsufficientExamples,
            format!("{stored} stored examples, at least {MIN_USABLE_EXAMPLES} required"),
        )
    }

    pub fn rate_limited(retry_after: Duration) -> Self {
        let mut error = Self::new(
            GenerationErrorKind::RateLimited,
            format!("next request allowed in {}ms", retry_after.as_millis()),
        );
        error.retry_after = Some(retry_after);
        error
    }

    pub fn upstream(status: Option<u16>, message: impl Into<String>) -> Self {
        let mut error = Self::new(GenerationErrorKind::Upstream, message);
        error.status = status;
        error
    }

    pub fn malformed_response(message: impl Into<String>) -> Self {
        Self::new(GenerationErrorKind::MalformedResponse, message)
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new(GenerationErrorKind::Timeout, message)
    }

    pub fn other(message: impl Into<String>) -> Self {
        Self::new(GenerationErrorKind::Other, message)
    }

    /// The corrective string shown to the person who triggered the request.
    pub fn user_message(&self) -> String {
        match self.kind {
            GenerationErrorKind::MissingCredential => {
                "Please set your Claude AI API key in the extension settings.".to_string()
            }
            GenerationErrorKind::InsufficientExamples => {
                "Please add at least 3 training examples in the extension settings.".to_string()
            }
            GenerationErrorKind::RateLimited => {
                "Please wait a moment before generating another reply.".to_string()
            }
            GenerationErrorKind::Upstream => self.message.clone(),
            GenerationErrorKind::MalformedResponse => {
                "Unexpected API response structure".to_string()
            }
            GenerationErrorKind::Timeout => {
                "The request to the Claude API timed out. Please try again.".to_string()
            }
            GenerationErrorKind::Other => self.message.clone(),
        }
    }
}

impl Display for GenerationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl Error for GenerationError {}

impl From<ClaudeError> for GenerationError {
    fn from(value: ClaudeError) -> Self {
        match value.kind {
            ClaudeErrorKind::Upstream => Self::upstream(value.status, value.message),
            ClaudeErrorKind::MalformedResponse => Self::malformed_response(value.message),
            ClaudeErrorKind::Timeout => Self::timeout(value.message),
            ClaudeErrorKind::InvalidRequest | ClaudeErrorKind::Transport => {
                Self::other(value.message)
            }
        }
    }
}

impl From<SettingsError> for GenerationError {
    fn from(value: SettingsError) -> Self {
        Self::other(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{GenerationError, GenerationErrorKind};
    use wclaude::ClaudeError;

    #[test]
    fn helper_builders_assign_expected_kinds() {
        assert_eq!(
            GenerationError::missing_credential().kind,
            GenerationErrorKind::MissingCredential
        );
        assert_eq!(
            GenerationError::insufficient_examples(1).kind,
            GenerationErrorKind::InsufficientExamples
        );

        let limited = GenerationError::rate_limited(Duration::from_millis(400));
        assert_eq!(limited.retry_after, Some(Duration::from_millis(400)));
        assert!(limited.message.contains("400"));
    }

    #[test]
    fn adapter_errors_map_one_to_one() {
        let upstream = GenerationError::from(ClaudeError::upstream(500, "internal"));
        assert_eq!(upstream.kind, GenerationErrorKind::Upstream);
        assert_eq!(upstream.status, Some(500));
        assert!(upstream.message.contains("internal"));

        let malformed = GenerationError::from(ClaudeError::malformed_response("{}"));
        assert_eq!(malformed.kind, GenerationErrorKind::MalformedResponse);

        let timeout = GenerationError::from(ClaudeError::timeout("deadline"));
        assert_eq!(timeout.kind, GenerationErrorKind::Timeout);

        let transport = GenerationError::from(ClaudeError::transport("connection refused"));
        assert_eq!(transport.kind, GenerationErrorKind::Other);
    }

    #[test]
    fn user_messages_match_the_corrective_strings() {
        assert_eq!(
            GenerationError::missing_credential().user_message(),
            "Please set your Claude AI API key in the extension settings."
        );
        assert_eq!(
            GenerationError::insufficient_examples(2).user_message(),
            "Please add at least 3 training examples in the extension settings."
        );
        assert_eq!(
            GenerationError::rate_limited(Duration::from_millis(10)).user_message(),
            "Please wait a moment before generating another reply."
        );
        assert_eq!(
            GenerationError::from(ClaudeError::upstream(401, "bad key")).user_message(),
            "API request failed (401): bad key"
        );
    }
}
