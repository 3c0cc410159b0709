//! AWS Bedrock backend using the Converse API.
//!
//! The model id must be an inference profile id such as
//! `us.anthropic.claude-sonnet-4-20250514-v1:0`; bare foundation model ids
//! are rejected by Converse for on-demand throughput.

use async_trait::async_trait;
use aws_sdk_bedrockruntime::Client;
use aws_sdk_bedrockruntime::types::{ContentBlock, ConversationRole, Message, SystemContentBlock};
use tracing::debug;

use navtrail_core::models::chat::{ChatMessage, ChatRole};

use crate::error::AiError;
use crate::model::LanguageModel;

pub struct BedrockModel {
    client: Client,
    model_id: String,
}

impl BedrockModel {
    pub fn new(client: Client, model_id: impl Into<String>) -> Self {
        Self {
            client,
            model_id: model_id.into(),
        }
    }

    /// Build a client from the default AWS credential chain for `region`.
    pub async fn from_region(region: impl Into<String>, model_id: impl Into<String>) -> Self {
        let config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(region.into()))
            .load()
            .await;
        Self::new(Client::new(&config), model_id)
    }
}

#[async_trait]
impl LanguageModel for BedrockModel {
    fn model_id(&self) -> &str {
        &self.model_id
    }

    async fn complete(
        &self,
        system_prompt: &str,
        messages: &[ChatMessage],
    ) -> Result<String, AiError> {
        let mut converse_messages: Vec<Message> = Vec::with_capacity(messages.len());

        for msg in messages {
            let role = match msg.role {
                ChatRole::User => ConversationRole::User,
                ChatRole::Assistant => ConversationRole::Assistant,
            };
            let message = Message::builder()
                .role(role)
                .content(ContentBlock::Text(msg.content.clone()))
                .build()
                .map_err(|e| AiError::Invocation(e.to_string()))?;
            converse_messages.push(message);
        }

        debug!(model_id = %self.model_id, messages = messages.len(), "sending converse request");

        let response = self
            .client
            .converse()
            .model_id(&self.model_id)
            .system(SystemContentBlock::Text(system_prompt.to_string()))
            .set_messages(Some(converse_messages))
            .send()
            .await
            .map_err(|e| AiError::Invocation(e.into_service_error().to_string()))?;

        let output_message = response
            .output()
            .and_then(|o| o.as_message().ok())
            .ok_or_else(|| AiError::ResponseParse("no message in response".to_string()))?;

        let text = output_message
            .content()
            .iter()
            .filter_map(|block| {
                if let ContentBlock::Text(t) = block {
                    Some(t.as_str())
                } else {
                    None
                }
            })
            .collect::<Vec<_>>()
            .join("");

        Ok(text)
    }
}
