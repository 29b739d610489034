//! Runtime wiring helpers and the glue-facing engine.

use std::sync::Arc;

use serde::Serialize;

use wclaude::{ClaudeError, ClaudeHttpTransport, ClaudeTransport};
use wreply::{GenerationError, ReplyOperationHooks, ReplyRequest, ReplyService};
use wsettings::{InMemorySettingsStore, SettingsStore};

/// What crosses the integration boundary: either generated text or one
/// human-readable error string. Serializes as `{"reply": ...}` or
/// `{"error": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplyOutcome {
    Reply(String),
    Error(String),
}

/// Settings store plus pipeline, bundled for the integration glue. The
/// engine loads a fresh settings snapshot per invocation so configuration
/// changes apply without a rebuild.
pub struct ReplyEngine {
    store: Arc<dyn SettingsStore>,
    service: ReplyService,
}

impl ReplyEngine {
    pub fn new(store: Arc<dyn SettingsStore>, service: ReplyService) -> Self {
        Self { store, service }
    }

    pub fn store(&self) -> Arc<dyn SettingsStore> {
        Arc::clone(&self.store)
    }

    pub async fn generate(&self, input_text: &str, refresh: bool) -> ReplyOutcome {
        let settings = match self.store.load().await {
            Ok(settings) => settings,
            Err(error) => return ReplyOutcome::Error(error_string(&GenerationError::from(error))),
        };

        let mut request = ReplyRequest::new(input_text);
        if refresh {
            request = request.as_refresh();
        }

        match self.service.generate_reply(&settings, &request).await {
            Ok(reply) => ReplyOutcome::Reply(reply),
            Err(error) => ReplyOutcome::Error(error_string(&error)),
        }
    }
}

fn error_string(error: &GenerationError) -> String {
    format!("Error: {}", error.user_message())
}

pub fn in_memory_store() -> Arc<dyn SettingsStore> {
    Arc::new(InMemorySettingsStore::new())
}

pub fn http_transport() -> Result<Arc<dyn ClaudeTransport>, ClaudeError> {
    let client = ClaudeHttpTransport::default_client()?;
    Ok(Arc::new(ClaudeHttpTransport::new(client)))
}

pub fn build_engine(store: Arc<dyn SettingsStore>) -> Result<ReplyEngine, ClaudeError> {
    Ok(ReplyEngine::new(
        store,
        ReplyService::new(http_transport()?),
    ))
}

pub fn build_engine_with(
    store: Arc<dyn SettingsStore>,
    transport: Arc<dyn ClaudeTransport>,
    hooks: Arc<dyn ReplyOperationHooks>,
) -> ReplyEngine {
    ReplyEngine::new(
        store,
        ReplyService::builder(transport).hooks(hooks).build(),
    )
}
