//! Exchange rates from ExchangeRate-API (v6).

use std::collections::BTreeMap;

use serde::Deserialize;
use tracing::debug;

use navtrail_core::keys;
use navtrail_core::models::currency::{CurrencyConversion, ExchangeRates};
use navtrail_core::models::source::DataSource;

use crate::error::ProviderError;
use crate::http::{decode, fetch_json, round_to};

pub const BASE_URL: &str = "https://v6.exchangerate-api.com/v6";
const SERVICE: &str = "exchangerate-api";

/// Units per US dollar used when no key is configured.
const MOCK_USD_RATES: &[(&str, f64)] = &[
    ("USD", 1.0),
    ("EUR", 0.92),
    ("GBP", 0.79),
    ("JPY", 149.5),
    ("AUD", 1.52),
    ("CAD", 1.36),
    ("CHF", 0.88),
    ("CNY", 7.24),
    ("INR", 83.1),
    ("MXN", 17.1),
    ("NZD", 1.64),
    ("SGD", 1.34),
    ("THB", 35.6),
    ("KRW", 1330.0),
    ("BRL", 4.97),
    ("ZAR", 18.7),
];

pub struct CurrencyProvider {
    http: reqwest::Client,
    api_key: Option<String>,
}

impl CurrencyProvider {
    pub fn new(http: reqwest::Client, api_key: Option<String>) -> Self {
        Self {
            http,
            api_key: keys::configured(api_key),
        }
    }

    pub fn is_live(&self) -> bool {
        self.api_key.is_some()
    }

    pub async fn rates(&self, base: &str) -> Result<ExchangeRates, ProviderError> {
        let base = currency_code(base)?;
        let Some(key) = &self.api_key else {
            debug!(service = SERVICE, %base, "no API key configured, serving mock rates");
            return mock_rates(&base);
        };

        let request = self.http.get(format!("{BASE_URL}/{key}/latest/{base}"));
        let wire: WireLatest = fetch_json(SERVICE, request).await?;
        shape_rates(wire)
    }

    /// Convert through the `from` rate table.
    pub async fn convert(
        &self,
        from: &str,
        to: &str,
        amount: f64,
    ) -> Result<CurrencyConversion, ProviderError> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(ProviderError::InvalidInput(format!(
                "amount must be a non-negative number, got {amount}"
            )));
        }
        let to = currency_code(to)?;
        let table = self.rates(from).await?;
        conversion(&table, &to, amount)
    }
}

#[derive(Deserialize)]
struct WireLatest {
    result: String,
    #[serde(default)]
    base_code: Option<String>,
    #[serde(default)]
    conversion_rates: BTreeMap<String, f64>,
    #[serde(default, rename = "error-type")]
    error_type: Option<String>,
}

/// Decode an ExchangeRate-API `/latest` body.
pub fn parse_rates(body: &str) -> Result<ExchangeRates, ProviderError> {
    decode(SERVICE, 200, body).and_then(shape_rates)
}

fn shape_rates(wire: WireLatest) -> Result<ExchangeRates, ProviderError> {
    if wire.result != "success" {
        return Err(ProviderError::Upstream {
            service: SERVICE,
            message: wire.error_type.unwrap_or(wire.result),
        });
    }
    let base = wire.base_code.ok_or_else(|| ProviderError::Decode {
        service: SERVICE,
        message: "missing base_code".to_string(),
    })?;

    Ok(ExchangeRates {
        source: DataSource::Live,
        base,
        rates: wire.conversion_rates,
    })
}

/// Cross rates derived from the fixed USD table.
pub fn mock_rates(base: &str) -> Result<ExchangeRates, ProviderError> {
    let usd_per_base = MOCK_USD_RATES
        .iter()
        .find(|(code, _)| *code == base)
        .map(|(_, rate)| *rate)
        .ok_or_else(|| ProviderError::InvalidInput(format!("unsupported currency {base}")))?;

    let rates = MOCK_USD_RATES
        .iter()
        .map(|(code, rate)| (code.to_string(), round_to(rate / usd_per_base, 6)))
        .collect();

    Ok(ExchangeRates {
        source: DataSource::Mock,
        base: base.to_string(),
        rates,
    })
}

/// Apply a rate table to `amount`. The result is rounded to cents.
pub fn conversion(
    table: &ExchangeRates,
    to: &str,
    amount: f64,
) -> Result<CurrencyConversion, ProviderError> {
    let rate = *table
        .rates
        .get(to)
        .ok_or_else(|| ProviderError::InvalidInput(format!("unsupported currency {to}")))?;

    Ok(CurrencyConversion {
        source: table.source,
        from: table.base.clone(),
        to: to.to_string(),
        amount,
        rate,
        result: round_to(amount * rate, 2),
    })
}

/// Normalise to an upper-case ISO 4217 code.
pub fn currency_code(code: &str) -> Result<String, ProviderError> {
    let code = code.trim().to_ascii_uppercase();
    if code.len() == 3 && code.bytes().all(|b| b.is_ascii_uppercase()) {
        Ok(code)
    } else {
        Err(ProviderError::InvalidInput(format!(
            "'{code}' is not a three-letter currency code"
        )))
    }
}
