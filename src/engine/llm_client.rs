use std::fmt;

use reqwest::blocking::Client;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::model::config::GeneratorConfig;

const ANTHROPIC_VERSION: &str = "2023-06-01";

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to decode API response")]
    Decode(#[source] serde_json::Error),

    #[error("API returned status {status}: {body}")]
    Api { status: u16, body: String },

    #[error("response contained no text content")]
    EmptyResponse,
}

/// Turns a prompt into generated text.
pub trait ContentGenerator {
    fn generate(&self, prompt: &str, max_tokens: u32) -> Result<String, GenerationError>;
}

#[derive(Serialize)]
pub struct MessagesRequest<'a> {
    pub model: &'a str,
    pub max_tokens: u32,
    pub messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize)]
pub struct ChatMessage<'a> {
    pub role: &'a str,
    pub content: &'a str,
}

#[derive(Deserialize)]
pub struct MessagesResponse {
    pub content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    Text { text: String },
    #[serde(other)]
    Other,
}

impl MessagesResponse {
    pub fn into_text(self) -> Option<String> {
        self.content.into_iter().find_map(|block| match block {
            ContentBlock::Text { text } => Some(text),
            ContentBlock::Other => None,
        })
    }
}

/// Text of the first `text` block in a Messages API response body.
pub fn parse_response(body: &str) -> Result<String, GenerationError> {
    let resp: MessagesResponse = serde_json::from_str(body).map_err(GenerationError::Decode)?;
    resp.into_text().ok_or(GenerationError::EmptyResponse)
}

fn error_body<E: fmt::Display>(body: Result<String, E>) -> String {
    body.unwrap_or_else(|e| format!("<unreadable body: {e}>"))
}

/// Blocking client for the Anthropic Messages API.
pub struct AnthropicClient {
    client: Client,
    api_key: Secret<String>,
    model: String,
    base_url: String,
}

impl AnthropicClient {
    pub fn new(
        api_key: Secret<String>,
        config: &GeneratorConfig,
    ) -> Result<Self, GenerationError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(GenerationError::Client)?;

        Ok(Self {
            client,
            api_key,
            model: config.model.clone(),
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    fn messages_url(&self) -> String {
        format!("{}/v1/messages", self.base_url)
    }
}

impl ContentGenerator for AnthropicClient {
    fn generate(&self, prompt: &str, max_tokens: u32) -> Result<String, GenerationError> {
        let url = self.messages_url();
        let req = MessagesRequest {
            model: &self.model,
            max_tokens,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        debug!(%url, model = %self.model, max_tokens, "sending generation request");

        let resp = self
            .client
            .post(&url)
            .header("x-api-key", self.api_key.expose_secret().as_str())
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&req)
            .send()
            .map_err(|source| GenerationError::Request {
                url: url.clone(),
                source,
            })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(GenerationError::Api {
                status: status.as_u16(),
                body: error_body(resp.text()),
            });
        }

        let body = resp
            .text()
            .map_err(|source| GenerationError::Request { url, source })?;

        parse_response(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn config(base_url: &str) -> GeneratorConfig {
        serde_json::from_value(json!({
            "active_topic": "traits",
            "active_topic_file": "topics.json",
            "difficulty": "beginner",
            "settings": { "mcq_count": 2, "problem_scaffold": "minimal" },
            "api_base_url": base_url,
        }))
        .unwrap()
    }

    #[test]
    fn test_request_body_shape() {
        let req = MessagesRequest {
            model: "claude-sonnet-4-20250514",
            max_tokens: 2000,
            messages: vec![ChatMessage {
                role: "user",
                content: "Write questions",
            }],
        };

        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(
            value,
            json!({
                "model": "claude-sonnet-4-20250514",
                "max_tokens": 2000,
                "messages": [{ "role": "user", "content": "Write questions" }],
            })
        );
    }

    #[test]
    fn test_first_text_block_is_returned() {
        let resp: MessagesResponse = serde_json::from_value(json!({
            "id": "msg_01",
            "type": "message",
            "role": "assistant",
            "content": [
                { "type": "thinking", "thinking": "hmm" },
                { "type": "text", "text": "## Question 1" },
                { "type": "text", "text": "ignored" }
            ],
            "stop_reason": "end_turn",
            "usage": { "input_tokens": 10, "output_tokens": 20 }
        }))
        .unwrap();

        assert_eq!(resp.into_text().as_deref(), Some("## Question 1"));
    }

    #[test]
    fn test_response_without_text() {
        let resp: MessagesResponse = serde_json::from_value(json!({ "content": [] })).unwrap();
        assert!(resp.into_text().is_none());
    }

    #[test]
    fn test_parse_response_body() {
        let body = r###"{"content":[{"type":"text","text":"## DESCRIPTION\nStack"}]}"###;
        assert_eq!(parse_response(body).unwrap(), "## DESCRIPTION\nStack");

        assert!(matches!(
            parse_response(r#"{"content":[]}"#),
            Err(GenerationError::EmptyResponse)
        ));
    }

    #[test]
    fn test_malformed_body_is_decode_error() {
        let err = parse_response("<html>Bad Gateway</html>").unwrap_err();

        assert!(matches!(err, GenerationError::Decode(_)));
        assert_eq!(err.to_string(), "failed to decode API response");
    }

    #[test]
    fn test_unreadable_error_body_is_reported() {
        let failed: Result<String, std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::UnexpectedEof,
            "connection closed",
        ));
        assert_eq!(error_body(failed), "<unreadable body: connection closed>");

        let read: Result<String, std::io::Error> = Ok("overloaded".to_string());
        assert_eq!(error_body(read), "overloaded");
    }

    #[test]
    fn test_messages_url_strips_trailing_slash() {
        let client = AnthropicClient::new(
            Secret::new("sk-test".to_string()),
            &config("http://localhost:8080/"),
        )
        .unwrap();

        assert_eq!(client.messages_url(), "http://localhost:8080/v1/messages");
        assert_eq!(client.model, "claude-sonnet-4-20250514");
    }
}
