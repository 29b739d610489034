//! Common imports for most wisereply applications.

pub use crate::{
    ReplyEngine, ReplyOutcome, build_engine, build_engine_with, http_transport, in_memory_store,
};
pub use crate::{
    ClaudeError, ClaudeErrorKind, ClaudeHttpTransport, ClaudeMessage, ClaudeRequest,
    ClaudeResponse, ClaudeRole, ClaudeTransport, Example, FilesystemSettingsStore,
    GenerationError, GenerationErrorKind, InMemorySettingsStore, MetricsReplyHooks,
    NoopReplyHooks, ReplyOperationHooks, ReplyRequest, ReplyService, Settings, SettingsError,
    SettingsStore, TracingReplyHooks,
};
