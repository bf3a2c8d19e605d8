//! Types for the Anthropic Messages API.

use serde::{Deserialize, Serialize};

/// A message in a conversation with the model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// The role of the message sender ("user" or "assistant").
    pub role: String,
    /// Plain-text content of the message.
    pub content: String,
}

impl Message {
    /// A user-role message.
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Request body for the Messages API.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    /// Model name.
    pub model: String,
    /// Maximum tokens to generate.
    pub max_tokens: u32,
    /// Conversation messages.
    pub messages: Vec<Message>,
    /// System prompt.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
}

/// Response from the Messages API.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    /// Unique response ID.
    pub id: String,
    /// Model that generated the response.
    pub model: String,
    /// Reason the response stopped.
    pub stop_reason: Option<String>,
    /// Response content blocks.
    pub content: Vec<ContentBlock>,
    /// Token usage information.
    pub usage: Usage,
}

impl ChatResponse {
    /// The first text block of the response, if any.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.content.iter().find_map(|block| match block {
            ContentBlock::Text { text } => Some(text.as_str()),
            ContentBlock::Unknown => None,
        })
    }
}

/// A content block within a response.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum ContentBlock {
    /// Text content.
    #[serde(rename = "text")]
    Text {
        /// The text content.
        text: String,
    },
    /// Any block type this client does not use.
    #[serde(other)]
    Unknown,
}

/// Token usage for a response.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Usage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

/// API error response envelope.
#[derive(Debug, Deserialize)]
pub struct ApiErrorResponse {
    /// Nested error details.
    pub error: ApiErrorDetail,
}

/// Nested error details.
#[derive(Debug, Deserialize)]
pub struct ApiErrorDetail {
    /// Error type.
    #[serde(rename = "type")]
    pub error_type: String,
    /// Error message.
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_response_text_extraction() {
        let json = r#"{
            "id": "msg_1",
            "model": "claude-sonnet-4-20250514",
            "stop_reason": "end_turn",
            "content": [{"type": "text", "text": "Namaste!"}],
            "usage": {"input_tokens": 12, "output_tokens": 4}
        }"#;

        let response: ChatResponse = serde_json::from_str(json).expect("deserialize");
        assert_eq!(response.text(), Some("Namaste!"));
        assert_eq!(response.usage.output_tokens, 4);
    }

    #[test]
    fn test_unknown_block_types_are_tolerated() {
        let json = r#"{
            "id": "msg_2",
            "model": "claude-sonnet-4-20250514",
            "stop_reason": null,
            "content": [
                {"type": "thinking", "thinking": "..."},
                {"type": "text", "text": "answer"}
            ],
            "usage": {"input_tokens": 1, "output_tokens": 1}
        }"#;

        let response: ChatResponse = serde_json::from_str(json).expect("deserialize");
        assert_eq!(response.text(), Some("answer"));
    }

    #[test]
    fn test_request_omits_absent_system_prompt() {
        let request = ChatRequest {
            model: "claude-sonnet-4-20250514".to_string(),
            max_tokens: 1024,
            messages: vec![Message::user("hi")],
            system: None,
        };

        let json = serde_json::to_value(&request).expect("serialize");
        assert!(json.get("system").is_none());
        assert_eq!(json["messages"][0]["role"], "user");
    }

    #[test]
    fn test_api_error_deserialization() {
        let json = r#"{
            "type": "error",
            "error": {
                "type": "invalid_request_error",
                "message": "max_tokens is too large"
            }
        }"#;

        let response: ApiErrorResponse = serde_json::from_str(json).expect("deserialize");
        assert_eq!(response.error.error_type, "invalid_request_error");
        assert_eq!(response.error.message, "max_tokens is too large");
    }
}
