//! Few-shot prompt assembly for reply generation.
//!
//! Each stored example becomes a user turn carrying the post and an
//! assistant turn carrying the reply, in stored order; the final unpaired
//! user turn carries the new input and is the one the model completes. The
//! style directive rides along once as the system instruction.

use wclaude::{ClaudeMessage, ClaudeRequest};
use wsettings::Example;

use crate::types::ReplyRequest;

pub const REPLY_MODEL: &str = "claude-3-5-sonnet-20241022";

pub const REPLY_MAX_TOKENS: u32 = 248;

pub const STYLE_SYSTEM_PROMPT: &str = "You're an unfiltered, raw voice in social media, an expert at crafting viral tweets with punch and resonance. Your task: create an original reply to the provided post that cuts straight to the truth

First, study the example tweets for their style and structure. Pay close attention to:
- Brutal honesty
- Simple, direct statements that get to the core
- Single-line sentences with minimal fluff
- Authentic, conversational tone
- Strategic line breaks to emphasize rhythm and impact

Focus on:
1. Straight-shooting language:
   - Real, simple, and bold statements
   - No extra words. No explanation. Just truth.

2. Themes of growth, authenticity, and self-respect, touching on:
   - Personal growth in a raw, no-filter tone
   - Mindset shifts that feel like a slap of reality
   - Simple actions that speak louder than advice
   - Honest reflections on relationships and boundaries

3. Powerful statements and relatability:
   - Each line should hit like a truth people need to hear
   - Tackle topics with an authentic, unpolished take

4. Independent ideas:
   - Each tweet should stand alone, making a clear point without explanation
   - Easy for people to resonate with and share

5. Avoid direct copying from examples:
   - Capture the essence without echoing the examples exactly
   - Deliver familiar sentiments with a fresh twist";

pub fn few_shot_messages(examples: &[Example], input_text: &str) -> Vec<ClaudeMessage> {
    let mut messages = Vec::with_capacity(examples.len() * 2 + 1);

    for example in examples {
        messages.push(ClaudeMessage::user(example.post.clone()));
        messages.push(ClaudeMessage::assistant(example.reply.clone()));
    }

    messages.push(ClaudeMessage::user(input_text));
    messages
}

pub fn assemble_request(examples: &[Example], request: &ReplyRequest) -> ClaudeRequest {
    ClaudeRequest::new(REPLY_MODEL, few_shot_messages(examples, &request.input_text))
        .with_system(STYLE_SYSTEM_PROMPT)
        .with_max_tokens(REPLY_MAX_TOKENS)
        .with_temperature(request.temperature())
}

#[cfg(test)]
mod tests {
    use wclaude::ClaudeRole;
    use wsettings::Example;

    use super::{REPLY_MAX_TOKENS, REPLY_MODEL, STYLE_SYSTEM_PROMPT, assemble_request, few_shot_messages};
    use crate::types::ReplyRequest;

    fn three_examples() -> Vec<Example> {
        vec![
            Example::new("A", "B"),
            Example::new("C", "D"),
            Example::new("E", "F"),
        ]
    }

    #[test]
    fn messages_alternate_strictly_with_the_input_last() {
        let messages = few_shot_messages(&three_examples(), "G");

        let expected = [
            (ClaudeRole::User, "A"),
            (ClaudeRole::Assistant, "B"),
            (ClaudeRole::User, "C"),
            (ClaudeRole::Assistant, "D"),
            (ClaudeRole::User, "E"),
            (ClaudeRole::Assistant, "F"),
            (ClaudeRole::User, "G"),
        ];

        assert_eq!(messages.len(), expected.len());
        for (message, (role, text)) in messages.iter().zip(expected) {
            assert_eq!(message.role, role);
            assert_eq!(message.text, text);
        }
    }

    #[test]
    fn refresh_changes_only_the_temperature() {
        let examples = three_examples();
        let first = assemble_request(&examples, &ReplyRequest::new("G"));
        let again = assemble_request(&examples, &ReplyRequest::new("G").as_refresh());

        assert_eq!(first.temperature, 0.0);
        assert_eq!(again.temperature, 1.0);

        assert_eq!(first.model, again.model);
        assert_eq!(first.system, again.system);
        assert_eq!(first.max_tokens, again.max_tokens);
        assert_eq!(first.messages, again.messages);
    }

    #[test]
    fn assembled_request_carries_the_fixed_knobs() {
        let request = assemble_request(&three_examples(), &ReplyRequest::new("G"));

        assert_eq!(request.model, REPLY_MODEL);
        assert_eq!(request.max_tokens, REPLY_MAX_TOKENS);
        assert_eq!(request.system, STYLE_SYSTEM_PROMPT);
        assert!(request.validate().is_ok());
    }
}
