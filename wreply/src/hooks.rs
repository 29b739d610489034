//! Operational hook contracts for the generation pipeline.

use std::time::Duration;

use crate::error::GenerationError;

/// Observation points around one `generate_reply` invocation. Rejections
/// happen before dispatch and never reach the network; failures happen after.
pub trait ReplyOperationHooks: Send + Sync {
    fn on_request_start(&self, _refresh: bool) {}

    fn on_rejected(&self, _error: &GenerationError) {}

    fn on_dispatch(&self, _message_count: usize, _temperature: f32) {}

    fn on_success(&self, _reply_chars: usize, _elapsed: Duration) {}

    fn on_failure(&self, _error: &GenerationError, _elapsed: Duration) {}
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopReplyHooks;

impl ReplyOperationHooks for NoopReplyHooks {}
