//! OpenAI Chat Completions compatible backend (`POST {base_url}/chat/completions`).
//!
//! Works with any gateway that speaks the same wire format, e.g. OpenRouter.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use navtrail_core::models::chat::{ChatMessage, ChatRole};

use crate::error::AiError;
use crate::model::LanguageModel;

pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";
pub const DEFAULT_MODEL: &str = "openai/gpt-4o-mini";
const DEFAULT_TEMPERATURE: f32 = 0.7;

pub struct OpenAiCompatModel {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
    temperature: f32,
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<WireMessage<'a>>,
    temperature: f32,
}

#[derive(Serialize)]
struct WireMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
    #[serde(default)]
    error: Option<WireError>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Deserialize)]
struct WireError {
    message: String,
}

impl OpenAiCompatModel {
    pub fn new(
        http: reqwest::Client,
        base_url: Option<String>,
        api_key: String,
        model: Option<String>,
    ) -> Self {
        let base_url = base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        Self {
            http,
            base_url,
            api_key,
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    fn url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[async_trait]
impl LanguageModel for OpenAiCompatModel {
    fn model_id(&self) -> &str {
        &self.model
    }

    async fn complete(
        &self,
        system_prompt: &str,
        messages: &[ChatMessage],
    ) -> Result<String, AiError> {
        let mut wire = Vec::with_capacity(messages.len() + 1);
        wire.push(WireMessage {
            role: "system",
            content: system_prompt,
        });
        for msg in messages {
            let role = match msg.role {
                ChatRole::User => "user",
                ChatRole::Assistant => "assistant",
            };
            wire.push(WireMessage {
                role,
                content: &msg.content,
            });
        }

        let request = CompletionRequest {
            model: &self.model,
            messages: wire,
            temperature: self.temperature,
        };

        debug!(model = %self.model, messages = messages.len(), "sending chat completion");

        let response = self
            .http
            .post(self.url())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| AiError::Invocation(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AiError::Invocation(e.to_string()))?;

        parse_completion(status.as_u16(), &body)
    }
}

/// Pull the assistant text out of a chat completions response body.
pub fn parse_completion(status: u16, body: &str) -> Result<String, AiError> {
    let parsed: Result<CompletionResponse, _> = serde_json::from_str(body);

    if !(200..300).contains(&status) {
        let detail = parsed
            .ok()
            .and_then(|r| r.error)
            .map(|e| e.message)
            .unwrap_or_else(|| body.chars().take(200).collect());
        return Err(AiError::Invocation(format!("HTTP {status}: {detail}")));
    }

    let response = parsed.map_err(|e| AiError::ResponseParse(e.to_string()))?;
    if let Some(err) = response.error {
        return Err(AiError::Invocation(err.message));
    }

    response
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .filter(|text| !text.trim().is_empty())
        .ok_or_else(|| AiError::ResponseParse("no message content in response".to_string()))
}
