//! Metrics-based observability hooks for the generation pipeline.
//!
//! ```rust
//! use wobserve::MetricsReplyHooks;
//! use wreply::ReplyOperationHooks;
//!
//! fn accepts_reply_hooks(_hooks: &dyn ReplyOperationHooks) {}
//!
//! let hooks = MetricsReplyHooks;
//! accepts_reply_hooks(&hooks);
//! ```

use std::time::Duration;

use wreply::{GenerationError, ReplyOperationHooks};

#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsReplyHooks;

impl ReplyOperationHooks for MetricsReplyHooks {
    fn on_request_start(&self, refresh: bool) {
        metrics::counter!(
            "wisereply_generate_start_total",
            "refresh" => refresh.to_string()
        )
        .increment(1);
    }

    fn on_rejected(&self, error: &GenerationError) {
        metrics::counter!(
            "wisereply_generate_rejected_total",
            "error_kind" => format!("{:?}", error.kind)
        )
        .increment(1);
    }

    fn on_dispatch(&self, message_count: usize, _temperature: f32) {
        metrics::counter!("wisereply_generate_dispatch_total").increment(1);
        metrics::histogram!("wisereply_dispatch_message_count").record(message_count as f64);
    }

    fn on_success(&self, reply_chars: usize, elapsed: Duration) {
        metrics::counter!("wisereply_generate_success_total").increment(1);
        metrics::histogram!(
            "wisereply_generate_duration_seconds",
            "status" => "success"
        )
        .record(elapsed.as_secs_f64());
        metrics::histogram!("wisereply_reply_length_chars").record(reply_chars as f64);
    }

    fn on_failure(&self, error: &GenerationError, elapsed: Duration) {
        metrics::counter!(
            "wisereply_generate_failure_total",
            "error_kind" => format!("{:?}", error.kind)
        )
        .increment(1);
        metrics::histogram!(
            "wisereply_generate_duration_seconds",
            "status" => "failure"
        )
        .record(elapsed.as_secs_f64());
    }
}
