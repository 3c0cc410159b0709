use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use navtrail_ai::bedrock::BedrockModel;
use navtrail_ai::model::LanguageModel;
use navtrail_ai::openai::OpenAiCompatModel;
use navtrail_ai::service::AiService;
use navtrail_core::keys;
use navtrail_providers::currency::CurrencyProvider;
use navtrail_providers::directions::DirectionsProvider;
use navtrail_providers::places::PlacesProvider;
use navtrail_providers::weather::WeatherProvider;
use navtrail_storage::store::LogStore;

use crate::config::{LlmConfig, ProviderKeys, ServerConfig};

const HTTP_TIMEOUT: Duration = Duration::from_secs(20);

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<LogStore>,
    pub ai: AiService,
    pub weather: Arc<WeatherProvider>,
    pub currency: Arc<CurrencyProvider>,
    pub places: Arc<PlacesProvider>,
    pub directions: Arc<DirectionsProvider>,
}

impl AppState {
    pub async fn from_config(config: &ServerConfig) -> eyre::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(HTTP_TIMEOUT)
            .build()
            .map_err(|e| eyre::eyre!("failed to build HTTP client: {e}"))?;

        let model = build_model(&config.llm, http.clone()).await;
        match &model {
            Some(m) => info!(model = m.model_id(), "language model configured"),
            None => warn!("no language model configured, AI features will serve mock answers"),
        }

        Ok(Self::with_parts(
            AiService::new(model),
            http,
            config.keys.clone(),
        ))
    }

    /// State with no keys and no model: every integration serves mocks.
    pub fn offline() -> Self {
        Self::with_parts(
            AiService::offline(),
            reqwest::Client::new(),
            ProviderKeys::default(),
        )
    }

    pub fn with_parts(ai: AiService, http: reqwest::Client, keys: ProviderKeys) -> Self {
        Self {
            store: Arc::new(LogStore::new()),
            ai,
            weather: Arc::new(WeatherProvider::new(http.clone(), keys.openweather)),
            currency: Arc::new(CurrencyProvider::new(http.clone(), keys.exchange_rate)),
            places: Arc::new(PlacesProvider::new(http.clone(), keys.google_maps)),
            directions: Arc::new(DirectionsProvider::new(http, keys.openrouteservice)),
        }
    }
}

async fn build_model(llm: &LlmConfig, http: reqwest::Client) -> Option<Arc<dyn LanguageModel>> {
    match llm {
        LlmConfig::OpenAi {
            api_key,
            base_url,
            model,
            temperature,
        } => {
            let api_key = keys::configured(api_key.clone())?;
            let mut backend =
                OpenAiCompatModel::new(http, Some(base_url.clone()), api_key, Some(model.clone()));
            if let Some(temperature) = *temperature {
                backend = backend.with_temperature(temperature);
            }
            let model: Arc<dyn LanguageModel> = Arc::new(backend);
            Some(model)
        }
        LlmConfig::Bedrock { region, model_id } => {
            let model_id = model_id.clone()?;
            let model: Arc<dyn LanguageModel> =
                Arc::new(BedrockModel::from_region(region.clone(), model_id).await);
            Some(model)
        }
    }
}
