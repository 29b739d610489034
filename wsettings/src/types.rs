//! Settings snapshot types shared by every storage backend.

use std::fmt::{Debug, Formatter};

/// Fewest stored examples a reply pipeline will accept as usable.
pub const MIN_USABLE_EXAMPLES: usize = 3;

/// Most examples a configuration surface should allow.
pub const MAX_EXAMPLES: usize = 10;

/// One stored (post, reply) pair used to teach the desired reply style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Example {
    pub post: String,
    pub reply: String,
}

impl Example {
    pub fn new(post: impl Into<String>, reply: impl Into<String>) -> Self {
        Self {
            post: post.into(),
            reply: reply.into(),
        }
    }
}

/// The full settings snapshot: one credential plus the ordered example list.
///
/// The order of `examples` is preserved by every backend; it determines the
/// message sequence sent to the model. The snapshot itself carries no
/// validation — configuration surfaces may save transient empty entries, and
/// usability checks belong to the pipeline.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Settings {
    pub api_key: String,
    pub examples: Vec<Example>,
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    pub fn with_examples(mut self, examples: Vec<Example>) -> Self {
        self.examples = examples;
        self
    }

    pub fn push_example(mut self, example: Example) -> Self {
        self.examples.push(example);
        self
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }
}

impl Debug for Settings {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("api_key", &"[REDACTED]")
            .field("examples", &self.examples)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::{Example, Settings};

    #[test]
    fn settings_builder_helpers_preserve_example_order() {
        let settings = Settings::new()
            .with_api_key("sk-ant-test")
            .push_example(Example::new("first post", "first reply"))
            .push_example(Example::new("second post", "second reply"));

        assert!(settings.has_api_key());
        assert_eq!(settings.examples.len(), 2);
        assert_eq!(settings.examples[0].post, "first post");
        assert_eq!(settings.examples[1].reply, "second reply");
    }

    #[test]
    fn settings_debug_never_prints_the_credential() {
        let settings = Settings::new().with_api_key("sk-ant-secret-value");
        let printed = format!("{settings:?}");

        assert!(printed.contains("[REDACTED]"));
        assert!(!printed.contains("sk-ant-secret-value"));
    }
}
