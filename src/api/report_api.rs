use super::models::{HotelInfo, MetricRows, ReservationPayload, ReservationRecord};
use super::{MetricsSource, RangeQuery};
use crate::libs::config::ConfigModule;
use crate::libs::data_storage::{APP_NAME, APP_VERSION};
use crate::libs::error::{ReportError, Result};
use crate::libs::messages::Message;
use crate::{msg_debug, msg_print, msg_warning};
use dialoguer::{theme::ColorfulTheme, Input, Password};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::env;
use std::time::Duration;

const METRICS_URL: &str = "internal/report/hotel/revenue-and-count";
const HOTEL_INFO_URL: &str = "internal/report/hotel/info";
const RESERVATIONS_URL: &str = "internal/report/hotel/reservation-detail";

pub const DEFAULT_API_URL: &str = "https://api.flowtheroom.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Environment variable holding the bearer credential.
pub const TOKEN_ENV: &str = "DAILYREP_API_TOKEN";
/// Environment variable overriding the configured API base URL.
pub const API_URL_ENV: &str = "DAILYREP_API_URL";

/// Common response envelope of the reporting API.
#[derive(Debug, Deserialize)]
struct ApiEnvelope {
    #[serde(rename = "Success", alias = "success", default)]
    success: bool,
    #[serde(default, alias = "Message")]
    message: Option<String>,
    #[serde(rename = "Data", alias = "data", default)]
    data: Value,
}

/// HTTP client for the reporting API.
///
/// Owns its connection pool; dropping the client releases the session.
#[derive(Debug)]
pub struct ReportApi {
    client: Client,
    config: ReportApiConfig,
}

impl ReportApi {
    pub fn new(config: &ReportApiConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(format!("{}/{}", APP_NAME, APP_VERSION))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// Performs one GET against `endpoint` and returns the envelope's `Data`.
    async fn fetch_data(&self, endpoint: &str, query: &RangeQuery) -> Result<Value> {
        let url = format!("{}/{}", self.config.api_url.trim_end_matches('/'), endpoint);
        msg_debug!(Message::ApiRequest(url.clone()));

        let mut request = self.client.get(&url).query(&query.params());
        if let Some(token) = self.config.auth_token.as_deref().filter(|t| !t.is_empty()) {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?.error_for_status()?;
        let body = response.text().await?;
        let envelope: ApiEnvelope = serde_json::from_str(&body)?;

        if !envelope.success {
            return Err(ReportError::Api(envelope.message.unwrap_or_else(|| "Unknown error".to_string())));
        }
        Ok(envelope.data)
    }

    async fn fetch_decoded<T: DeserializeOwned + Default>(&self, endpoint: &str, query: &RangeQuery) -> Result<T> {
        match self.fetch_data(endpoint, query).await? {
            Value::Null => Ok(T::default()),
            data => Ok(serde_json::from_value(data)?),
        }
    }
}

/// Logs a failed call and substitutes an empty result.
fn or_empty<T: Default>(endpoint: &str, result: Result<T>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => {
            msg_warning!(Message::ApiCallFailed(endpoint.to_string(), e.to_string()));
            T::default()
        }
    }
}

impl MetricsSource for ReportApi {
    async fn daily_metrics(&self, query: &RangeQuery) -> MetricRows {
        or_empty(METRICS_URL, self.fetch_decoded::<MetricRows>(METRICS_URL, query).await)
    }

    async fn hotel_info(&self, query: &RangeQuery) -> Option<HotelInfo> {
        let result = match self.fetch_data(HOTEL_INFO_URL, query).await {
            Ok(Value::Null) => Ok(None),
            Ok(data) => serde_json::from_value::<HotelInfo>(data).map(Some).map_err(ReportError::from),
            Err(e) => Err(e),
        };
        or_empty(HOTEL_INFO_URL, result)
    }

    async fn reservations(&self, query: &RangeQuery) -> Vec<ReservationRecord> {
        let result = match self.fetch_data(RESERVATIONS_URL, query).await {
            Ok(Value::Null) => Ok(Vec::new()),
            Ok(data) => serde_json::from_value::<ReservationPayload>(data)
                .map(ReservationPayload::into_records)
                .map_err(ReportError::from),
            Err(e) => Err(e),
        };
        or_empty(RESERVATIONS_URL, result)
    }
}

/// Connection settings for the reporting API.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ReportApiConfig {
    pub api_url: String,
    /// Bearer credential. Prefer supplying it through `DAILYREP_API_TOKEN`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_token: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for ReportApiConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            auth_token: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ReportApiConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "api".to_string(),
            name: "Reporting API".to_string(),
        }
    }

    /// Applies `DAILYREP_API_URL` and `DAILYREP_API_TOKEN` on top of the saved values.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(url) = env::var(API_URL_ENV) {
            if !url.trim().is_empty() {
                self.api_url = url.trim().to_string();
            }
        }
        if let Ok(token) = env::var(TOKEN_ENV) {
            if !token.trim().is_empty() {
                self.auth_token = Some(token.trim().to_string());
            }
        }
        self
    }

    pub fn has_token(&self) -> bool {
        self.auth_token.as_deref().is_some_and(|t| !t.is_empty())
    }

    pub fn init(config: &Option<ReportApiConfig>) -> anyhow::Result<Self> {
        let config = config.clone().unwrap_or_default();
        msg_print!(Message::ConfigModuleApi);

        let api_url = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptApiUrl.to_string())
            .default(config.api_url)
            .interact_text()?;
        let token: String = Password::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptApiToken.to_string())
            .allow_empty_password(true)
            .interact()?;
        let timeout_secs = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptApiTimeout.to_string())
            .default(config.timeout_secs)
            .interact_text()?;

        Ok(Self {
            api_url,
            // An empty answer keeps the previously saved credential
            auth_token: if token.is_empty() { config.auth_token } else { Some(token) },
            timeout_secs,
        })
    }
}
