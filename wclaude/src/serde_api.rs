//! Messages API HTTP payload serde models and interpretation helpers.

use serde::{Deserialize, Serialize};

use crate::error::ClaudeError;
use crate::types::{ClaudeRequest, ClaudeResponse, ClaudeUsage};

pub(crate) fn build_api_request(request: ClaudeRequest) -> Result<MessagesApiRequest, ClaudeError> {
    request.validate()?;

    let messages = request
        .messages
        .into_iter()
        .map(|message| ApiMessage {
            role: message.role.as_str().to_string(),
            content: vec![ApiContentBlock {
                block_type: "text".to_string(),
                text: message.text,
            }],
        })
        .collect();

    Ok(MessagesApiRequest {
        model: request.model,
        max_tokens: request.max_tokens,
        temperature: request.temperature,
        system: request.system,
        messages,
    })
}

/// Interpret a success body. A body that fails to parse, parses with an
/// empty or missing `content` list, or whose first block carries no text is
/// a malformed response; the raw body travels with the error for diagnostics.
pub(crate) fn interpret_response(raw_body: &str) -> Result<ClaudeResponse, ClaudeError> {
    let parsed = serde_json::from_str::<MessagesApiResponse>(raw_body)
        .map_err(|_| ClaudeError::malformed_response(raw_body))?;

    let Some(first) = parsed.content.into_iter().next() else {
        return Err(ClaudeError::malformed_response(raw_body));
    };
    let Some(text) = first.text else {
        return Err(ClaudeError::malformed_response(raw_body));
    };

    let usage = parsed.usage.unwrap_or_default();
    Ok(ClaudeResponse {
        text,
        model: parsed.model.unwrap_or_default(),
        stop_reason: parsed.stop_reason,
        usage: ClaudeUsage {
            input_tokens: usage.input_tokens,
            output_tokens: usage.output_tokens,
        },
    })
}

#[derive(Debug, Serialize)]
pub(crate) struct MessagesApiRequest {
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub system: String,
    pub messages: Vec<ApiMessage>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ApiMessage {
    pub role: String,
    pub content: Vec<ApiContentBlock>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ApiContentBlock {
    #[serde(rename = "type")]
    pub block_type: String,
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MessagesApiResponse {
    #[serde(default)]
    pub content: Vec<ApiResponseContentBlock>,
    pub model: Option<String>,
    pub stop_reason: Option<String>,
    pub usage: Option<ApiUsage>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiResponseContentBlock {
    pub text: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub(crate) struct ApiUsage {
    #[serde(default)]
    pub input_tokens: u32,
    #[serde(default)]
    pub output_tokens: u32,
}

#[cfg(test)]
mod tests {
    use super::{build_api_request, interpret_response};
    use crate::types::{ClaudeMessage, ClaudeRequest};
    use crate::ClaudeErrorKind;

    fn request() -> ClaudeRequest {
        ClaudeRequest::new(
            "claude-3-5-sonnet-20241022",
            vec![
                ClaudeMessage::user("a post"),
                ClaudeMessage::assistant("a reply"),
                ClaudeMessage::user("the new post"),
            ],
        )
        .with_system("stay terse")
        .with_max_tokens(248)
        .with_temperature(1.0)
    }

    #[test]
    fn api_request_serializes_to_the_fixed_wire_shape() {
        let api_request = build_api_request(request()).expect("request should build");
        let value = serde_json::to_value(&api_request).expect("serialize");

        assert_eq!(value["model"], "claude-3-5-sonnet-20241022");
        assert_eq!(value["max_tokens"], 248);
        assert_eq!(value["temperature"], 1.0);
        assert_eq!(value["system"], "stay terse");
        assert_eq!(value["messages"][0]["role"], "user");
        assert_eq!(value["messages"][0]["content"][0]["type"], "text");
        assert_eq!(value["messages"][0]["content"][0]["text"], "a post");
        assert_eq!(value["messages"][1]["role"], "assistant");
        assert_eq!(value["messages"][2]["content"][0]["text"], "the new post");
    }

    #[test]
    fn interpret_response_reads_the_first_content_block() {
        let response = interpret_response(
            r#"{"content":[{"type":"text","text":" hello "}],"model":"claude-3-5-sonnet-20241022","stop_reason":"end_turn","usage":{"input_tokens":12,"output_tokens":4}}"#,
        )
        .expect("response should interpret");

        assert_eq!(response.text, " hello ");
        assert_eq!(response.model, "claude-3-5-sonnet-20241022");
        assert_eq!(response.stop_reason.as_deref(), Some("end_turn"));
        assert_eq!(response.usage.input_tokens, 12);
    }

    #[test]
    fn empty_or_missing_content_is_malformed() {
        let empty = interpret_response(r#"{"content":[]}"#).expect_err("empty must fail");
        assert_eq!(empty.kind, ClaudeErrorKind::MalformedResponse);
        assert_eq!(empty.body.as_deref(), Some(r#"{"content":[]}"#));

        let missing = interpret_response(r#"{"id":"msg_1"}"#).expect_err("missing must fail");
        assert_eq!(missing.kind, ClaudeErrorKind::MalformedResponse);

        let textless = interpret_response(r#"{"content":[{"type":"tool_use"}]}"#)
            .expect_err("textless first block must fail");
        assert_eq!(textless.kind, ClaudeErrorKind::MalformedResponse);
    }

    #[test]
    fn unparseable_body_is_malformed_and_keeps_the_raw_text() {
        let error = interpret_response("<html>bad gateway</html>").expect_err("must fail");
        assert_eq!(error.kind, ClaudeErrorKind::MalformedResponse);
        assert_eq!(error.body.as_deref(), Some("<html>bad gateway</html>"));
    }
}
