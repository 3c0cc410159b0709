use async_trait::async_trait;

use navtrail_core::models::chat::ChatMessage;

use crate::error::AiError;

/// A hosted text-generation model.
///
/// Implementations send the system prompt and the conversation as-is and
/// return the assistant's reply text, without interpreting it.
#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// Identifier of the backing model, for logging.
    fn model_id(&self) -> &str;

    async fn complete(
        &self,
        system_prompt: &str,
        messages: &[ChatMessage],
    ) -> Result<String, AiError>;
}
