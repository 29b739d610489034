//! Messages API request/response types and the redacted credential wrapper.

use crate::ClaudeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClaudeRole {
    User,
    Assistant,
}

impl ClaudeRole {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaudeMessage {
    pub role: ClaudeRole,
    pub text: String,
}

impl ClaudeMessage {
    pub fn new(role: ClaudeRole, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(ClaudeRole::User, text)
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(ClaudeRole::Assistant, text)
    }
}

/// One Messages API call: a system instruction attached once, an ordered
/// message sequence, and fixed sampling knobs.
#[derive(Debug, Clone, PartialEq)]
pub struct ClaudeRequest {
    pub model: String,
    pub system: String,
    pub messages: Vec<ClaudeMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl ClaudeRequest {
    pub fn new(model: impl Into<String>, messages: Vec<ClaudeMessage>) -> Self {
        Self {
            model: model.into(),
            system: String::new(),
            messages,
            temperature: 0.0,
            max_tokens: 1024,
        }
    }

    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = system.into();
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn validate(&self) -> Result<(), ClaudeError> {
        if self.model.trim().is_empty() {
            return Err(ClaudeError::invalid_request("model must not be empty"));
        }

        if self.messages.is_empty() {
            return Err(ClaudeError::invalid_request(
                "at least one message is required",
            ));
        }

        if self.max_tokens == 0 {
            return Err(ClaudeError::invalid_request(
                "max_tokens must be greater than zero",
            ));
        }

        if !(0.0..=1.0).contains(&self.temperature) {
            return Err(ClaudeError::invalid_request(
                "temperature must be in the inclusive range 0.0..=1.0",
            ));
        }

        Ok(())
    }
}

/// A successfully interpreted Messages API response. `text` is the first
/// content block verbatim; trimming is the caller's decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaudeResponse {
    pub text: String,
    pub model: String,
    pub stop_reason: Option<String>,
    pub usage: ClaudeUsage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClaudeUsage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

#[derive(PartialEq, Eq)]
pub struct SecretString {
    value: String,
}

impl SecretString {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn expose(&self) -> &str {
        self.value.as_str()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

impl std::fmt::Debug for SecretString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl Drop for SecretString {
    fn drop(&mut self) {
        unsafe {
            self.value.as_mut_vec().fill(0);
        }
    }
}
