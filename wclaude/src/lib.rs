//! Anthropic Messages API adapter for the wisereply reply engine.
//!
//! Typed request and response models, a transport trait for test doubles,
//! and a reqwest-backed HTTP implementation of the fixed wire contract.
//!
//! ```rust
//! use wclaude::{ClaudeMessage, ClaudeRequest};
//!
//! let request = ClaudeRequest::new(
//!     "claude-3-5-sonnet-20241022",
//!     vec![ClaudeMessage::user("a post to reply to")],
//! )
//! .with_max_tokens(248);
//!
//! assert!(request.validate().is_ok());
//! ```

mod error;
mod serde_api;
mod transport;
mod types;

pub use error::{ClaudeError, ClaudeErrorKind};
pub use transport::{
    ANTHROPIC_BETA, ANTHROPIC_VERSION, CLAUDE_BASE_URL, ClaudeFuture, ClaudeHttpTransport,
    ClaudeTransport, DEFAULT_REQUEST_TIMEOUT,
};
pub use types::{
    ClaudeMessage, ClaudeRequest, ClaudeResponse, ClaudeRole, ClaudeUsage, SecretString,
};
