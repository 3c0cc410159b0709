use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::{info, warn};
use uuid::Uuid;

use navtrail_core::models::chat::{ChatMessage, ChatRole};
use navtrail_core::models::generated::Generated;
use navtrail_core::models::insights::{DestinationRecommendation, TravelInsights};
use navtrail_core::models::itinerary::{Itinerary, ItineraryRequest};
use navtrail_core::models::travel_log::TravelLog;

use crate::error::AiError;
use crate::extract::extract_json;
use crate::mock;
use crate::model::LanguageModel;
use crate::prompts;

/// Longest itinerary that will be requested from a model.
pub const MAX_ITINERARY_DAYS: u32 = 14;

/// Travel-specific operations on top of an optional language model.
///
/// With no model every operation returns its mock fallback. With a model,
/// invocation or parse failures are logged and the mock fallback is
/// returned instead of an error.
#[derive(Clone, Default)]
pub struct AiService {
    model: Option<Arc<dyn LanguageModel>>,
}

impl AiService {
    pub fn new(model: Option<Arc<dyn LanguageModel>>) -> Self {
        Self { model }
    }

    /// A service that always answers from the mock fallbacks.
    pub fn offline() -> Self {
        Self::default()
    }

    pub fn is_live(&self) -> bool {
        self.model.is_some()
    }

    pub fn model_id(&self) -> Option<&str> {
        self.model.as_deref().map(|m| m.model_id())
    }

    /// Answer the latest user message, optionally grounded in a log.
    pub async fn chat(
        &self,
        messages: &[ChatMessage],
        log: Option<&TravelLog>,
    ) -> Result<Generated<ChatMessage>, AiError> {
        if !messages.iter().any(|m| m.role == ChatRole::User) {
            return Err(AiError::InvalidRequest(
                "conversation has no user message".to_string(),
            ));
        }

        let Some(model) = &self.model else {
            return Ok(Generated::mock(mock::chat_reply(messages)));
        };

        let system = prompts::chat_system_prompt(log);
        match model.complete(&system, messages).await {
            Ok(text) => Ok(Generated::live(ChatMessage::assistant(text.trim()))),
            Err(e) => {
                warn!(error = %e, "chat completion failed, serving mock reply");
                Ok(Generated::mock(mock::chat_reply(messages)))
            }
        }
    }

    pub async fn generate_itinerary(
        &self,
        req: &ItineraryRequest,
    ) -> Result<Generated<Itinerary>, AiError> {
        if req.destination.trim().is_empty() {
            return Err(AiError::InvalidRequest("destination is required".to_string()));
        }
        if req.days == 0 || req.days > MAX_ITINERARY_DAYS {
            return Err(AiError::InvalidRequest(format!(
                "days must be between 1 and {MAX_ITINERARY_DAYS}"
            )));
        }

        let prompt = prompts::itinerary_prompt(req);
        let generated = self
            .structured(prompts::ITINERARY_SYSTEM_PROMPT, prompt, "itinerary", || {
                mock::itinerary(req)
            })
            .await;

        Ok(generated)
    }

    pub async fn generate_insights(&self, log: &TravelLog) -> Generated<TravelInsights> {
        let prompt = prompts::insights_prompt(log);
        self.structured(prompts::INSIGHTS_SYSTEM_PROMPT, prompt, "insights", || {
            mock::insights(log)
        })
        .await
    }

    pub async fn recommend_destinations(
        &self,
        logs: &[TravelLog],
        preferences: Option<&str>,
    ) -> Generated<Vec<DestinationRecommendation>> {
        let prompt = prompts::recommendations_prompt(logs, preferences);
        self.structured(
            prompts::RECOMMENDATIONS_SYSTEM_PROMPT,
            prompt,
            "recommendations",
            || mock::recommendations(logs),
        )
        .await
    }

    /// Single-turn call whose reply must contain JSON for `T`.
    async fn structured<T, F>(
        &self,
        system: &str,
        prompt: String,
        operation: &'static str,
        fallback: F,
    ) -> Generated<T>
    where
        T: DeserializeOwned,
        F: FnOnce() -> T,
    {
        let Some(model) = &self.model else {
            return Generated::mock(fallback());
        };

        let request_id = Uuid::new_v4();
        info!(%request_id, operation, model = model.model_id(), "starting generation");

        let result = model
            .complete(system, &[ChatMessage::user(prompt)])
            .await
            .and_then(|text| extract_json::<T>(&text));

        match result {
            Ok(output) => {
                info!(%request_id, operation, "generation complete");
                Generated::live(output)
            }
            Err(e) => {
                warn!(%request_id, operation, error = %e, "generation failed, serving mock");
                Generated::mock(fallback())
            }
        }
    }
}
