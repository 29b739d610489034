//! The reply-generation pipeline: validate, pace, assemble, dispatch,
//! interpret.

use std::sync::Arc;
use std::time::Duration;

use wclaude::{ClaudeTransport, SecretString};
use wsettings::{MIN_USABLE_EXAMPLES, Settings};

use crate::error::GenerationError;
use crate::hooks::{NoopReplyHooks, ReplyOperationHooks};
use crate::pacer::{Clock, RequestPacer, SystemClock};
use crate::prompt::assemble_request;
use crate::types::ReplyRequest;

/// One service instance owns the rate limiter; callers are expected to keep
/// at most one invocation in flight at a time.
pub struct ReplyService {
    transport: Arc<dyn ClaudeTransport>,
    pacer: RequestPacer,
    clock: Arc<dyn Clock>,
    hooks: Arc<dyn ReplyOperationHooks>,
}

impl ReplyService {
    pub fn new(transport: Arc<dyn ClaudeTransport>) -> Self {
        Self::builder(transport).build()
    }

    pub fn builder(transport: Arc<dyn ClaudeTransport>) -> ReplyServiceBuilder {
        ReplyServiceBuilder {
            transport,
            clock: None,
            hooks: None,
            interval: None,
        }
    }

    /// Generate a reply to `request.input_text` in the style taught by the
    /// stored examples.
    ///
    /// Preconditions run in a fixed order and short-circuit: credential,
    /// example sufficiency, then rate limit. Only a dispatched request
    /// advances the limiter, and it advances before the response is
    /// interpreted, so an attempt counts even when parsing fails.
    pub async fn generate_reply(
        &self,
        settings: &Settings,
        request: &ReplyRequest,
    ) -> Result<String, GenerationError> {
        self.hooks.on_request_start(request.refresh);
        let started = self.clock.now();

        if let Err(error) = self.validate(settings) {
            self.hooks.on_rejected(&error);
            return Err(error);
        }

        if let Err(error) = self.pacer.check() {
            self.hooks.on_rejected(&error);
            return Err(error);
        }

        let claude_request = assemble_request(&settings.examples, request);
        self.hooks
            .on_dispatch(claude_request.messages.len(), claude_request.temperature);
        self.pacer.mark_dispatched()?;

        let api_key = SecretString::new(settings.api_key.clone());
        match self.transport.complete(claude_request, api_key).await {
            Ok(response) => {
                let reply = response.text.trim().to_string();
                self.hooks
                    .on_success(reply.chars().count(), self.elapsed_since(started));
                Ok(reply)
            }
            Err(error) => {
                let error = GenerationError::from(error);
                self.hooks.on_failure(&error, self.elapsed_since(started));
                Err(error)
            }
        }
    }

    fn validate(&self, settings: &Settings) -> Result<(), GenerationError> {
        if settings.api_key.is_empty() {
            return Err(GenerationError::missing_credential());
        }

        if settings.examples.len() < MIN_USABLE_EXAMPLES {
            return Err(GenerationError::insufficient_examples(
                settings.examples.len(),
            ));
        }

        Ok(())
    }

    fn elapsed_since(&self, started: std::time::Instant) -> Duration {
        self.clock.now().saturating_duration_since(started)
    }
}

pub struct ReplyServiceBuilder {
    transport: Arc<dyn ClaudeTransport>,
    clock: Option<Arc<dyn Clock>>,
    hooks: Option<Arc<dyn ReplyOperationHooks>>,
    interval: Option<Duration>,
}

impl ReplyServiceBuilder {
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    pub fn hooks(mut self, hooks: Arc<dyn ReplyOperationHooks>) -> Self {
        self.hooks = Some(hooks);
        self
    }

    pub fn interval(mut self, interval: Duration) -> Self {
        self.interval = Some(interval);
        self
    }

    pub fn build(self) -> ReplyService {
        let clock = self
            .clock
            .unwrap_or_else(|| Arc::new(SystemClock) as Arc<dyn Clock>);

        let mut pacer = RequestPacer::new(Arc::clone(&clock));
        if let Some(interval) = self.interval {
            pacer = pacer.with_interval(interval);
        }

        ReplyService {
            transport: self.transport,
            pacer,
            clock,
            hooks: self
                .hooks
                .unwrap_or_else(|| Arc::new(NoopReplyHooks) as Arc<dyn ReplyOperationHooks>),
        }
    }
}
