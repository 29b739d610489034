//! Unified facade over the wisereply workspace crates.
//!
//! This crate is designed to be the single dependency for most applications.
//! It re-exports the settings store, the Claude adapter, the generation
//! pipeline, and the observability hooks, and provides wiring helpers that
//! assemble them into a ready-to-call engine.
//!
//! ```rust
//! use wisereply::{Example, Settings};
//!
//! let settings = Settings::new()
//!     .with_api_key("sk-ant-demo")
//!     .push_example(Example::new("a post", "a reply"))
//!     .push_example(Example::new("b post", "b reply"))
//!     .push_example(Example::new("c post", "c reply"));
//!
//! assert_eq!(settings.examples.len(), 3);
//! ```

pub mod prelude;
pub mod runtime;

pub use wclaude;
pub use wobserve;
pub use wreply;
pub use wsettings;

pub use wclaude::{
    ANTHROPIC_BETA, ANTHROPIC_VERSION, CLAUDE_BASE_URL, ClaudeError, ClaudeErrorKind,
    ClaudeFuture, ClaudeHttpTransport, ClaudeMessage, ClaudeRequest, ClaudeResponse, ClaudeRole,
    ClaudeTransport, ClaudeUsage, DEFAULT_REQUEST_TIMEOUT, SecretString,
};
pub use wobserve::{MetricsReplyHooks, TracingReplyHooks};
pub use wreply::{
    Clock, GenerationError, GenerationErrorKind, MIN_REQUEST_INTERVAL, NoopReplyHooks,
    REPLY_MAX_TOKENS, REPLY_MODEL, ReplyOperationHooks, ReplyRequest, ReplyService,
    ReplyServiceBuilder, RequestPacer, STYLE_SYSTEM_PROMPT, SystemClock, assemble_request,
    few_shot_messages,
};
pub use wsettings::{
    Example, FilesystemSettingsStore, InMemorySettingsStore, MAX_EXAMPLES, MIN_USABLE_EXAMPLES,
    Settings, SettingsError, SettingsErrorKind, SettingsFuture, SettingsStore,
};

pub use runtime::{
    ReplyEngine, ReplyOutcome, build_engine, build_engine_with, http_transport, in_memory_store,
};
