//! Process configuration, read once from the environment at startup.

use std::env;

use navtrail_ai::openai::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use navtrail_core::keys;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_AWS_REGION: &str = "us-east-1";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Insert the bundled demo log at startup.
    pub seed_demo: bool,
    pub keys: ProviderKeys,
    pub llm: LlmConfig,
}

/// Raw third-party keys. Providers apply the placeholder rule themselves.
#[derive(Debug, Clone, Default)]
pub struct ProviderKeys {
    pub openweather: Option<String>,
    pub exchange_rate: Option<String>,
    pub google_maps: Option<String>,
    pub openrouteservice: Option<String>,
}

#[derive(Debug, Clone)]
pub enum LlmConfig {
    /// Any OpenAI-compatible chat completions endpoint.
    OpenAi {
        api_key: Option<String>,
        base_url: String,
        model: String,
        /// Sampling temperature; the backend default when unset.
        temperature: Option<f32>,
    },
    Bedrock {
        region: String,
        model_id: Option<String>,
    },
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self::OpenAi {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: None,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            seed_demo: false,
            keys: ProviderKeys::default(),
            llm: LlmConfig::default(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build the config from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let port = match var("NAVTRAIL_PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|e| eyre::eyre!("NAVTRAIL_PORT '{raw}' is not a valid port: {e}"))?,
            None => DEFAULT_PORT,
        };

        let seed_demo = var("NAVTRAIL_SEED_DEMO")
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        let temperature = match var("LLM_TEMPERATURE") {
            Some(raw) => {
                let value: f32 = raw
                    .trim()
                    .parse()
                    .map_err(|e| eyre::eyre!("LLM_TEMPERATURE '{raw}' is not a number: {e}"))?;
                if !(0.0..=2.0).contains(&value) {
                    return Err(eyre::eyre!("LLM_TEMPERATURE {value} is outside 0.0..=2.0"));
                }
                Some(value)
            }
            None => None,
        };

        let llm = match var("LLM_PROVIDER").as_deref().map(str::trim) {
            None | Some("openai") => LlmConfig::OpenAi {
                api_key: var(keys::LLM_API_KEY),
                base_url: var("LLM_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
                model: var("LLM_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
                temperature,
            },
            Some("bedrock") => LlmConfig::Bedrock {
                region: var("AWS_REGION").unwrap_or_else(|| DEFAULT_AWS_REGION.to_string()),
                model_id: var("BEDROCK_MODEL_ID"),
            },
            Some(other) => {
                return Err(eyre::eyre!(
                    "LLM_PROVIDER '{other}' is not supported (expected openai or bedrock)"
                ));
            }
        };

        Ok(Self {
            host: var("NAVTRAIL_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            seed_demo,
            keys: ProviderKeys {
                openweather: var(keys::OPENWEATHER_API_KEY),
                exchange_rate: var(keys::EXCHANGE_RATE_API_KEY),
                google_maps: var(keys::GOOGLE_MAPS_API_KEY),
                openrouteservice: var(keys::OPENROUTESERVICE_API_KEY),
            },
            llm,
        })
    }
}
