//! Observability for the wisereply reply engine: `tracing` and `metrics`
//! implementations of the pipeline's operation hooks.

mod metrics_hooks;
mod tracing_hooks;

pub use metrics_hooks::MetricsReplyHooks;
pub use tracing_hooks::TracingReplyHooks;
