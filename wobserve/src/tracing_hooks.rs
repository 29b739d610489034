//! Tracing-based observability hooks for the generation pipeline.
//!
//! ```rust
//! use wobserve::TracingReplyHooks;
//! use wreply::ReplyOperationHooks;
//!
//! fn accepts_reply_hooks(_hooks: &dyn ReplyOperationHooks) {}
//!
//! let hooks = TracingReplyHooks;
//! accepts_reply_hooks(&hooks);
//! ```

use std::time::Duration;

use wreply::{GenerationError, ReplyOperationHooks};

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReplyHooks;

impl ReplyOperationHooks for TracingReplyHooks {
    fn on_request_start(&self, refresh: bool) {
        tracing::info!(phase = "reply", event = "request_start", refresh);
    }

    fn on_rejected(&self, error: &GenerationError) {
        tracing::warn!(
            phase = "reply",
            event = "rejected",
            error_kind = ?error.kind,
            retry_after_ms = error.retry_after.map(|delay| delay.as_millis() as u64),
            error = %error
        );
    }

    fn on_dispatch(&self, message_count: usize, temperature: f32) {
        tracing::info!(
            phase = "reply",
            event = "dispatch",
            message_count,
            temperature
        );
    }

    fn on_success(&self, reply_chars: usize, elapsed: Duration) {
        tracing::info!(
            phase = "reply",
            event = "success",
            reply_chars,
            elapsed_ms = elapsed.as_millis() as u64
        );
    }

    fn on_failure(&self, error: &GenerationError, elapsed: Duration) {
        tracing::error!(
            phase = "reply",
            event = "failure",
            error_kind = ?error.kind,
            status = error.status,
            elapsed_ms = elapsed.as_millis() as u64,
            error = %error
        );
    }
}
