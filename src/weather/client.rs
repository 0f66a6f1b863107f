//! OpenWeatherMap互換の予報APIクライアント

use super::WeatherProvider;
use crate::config::Config;
use crate::error::{FarmVisionError, Result};
use async_trait::async_trait;
use farm_vision_common::ForecastPayload;
use std::time::Duration;
use tracing::{debug, warn};

const USER_AGENT: &str = concat!("farm-vision/", env!("CARGO_PKG_VERSION"));

pub struct OpenWeatherClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
    units: String,
    timeout: Duration,
}

impl OpenWeatherClient {
    pub fn new(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        units: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| FarmVisionError::WeatherFetch(e.to_string()))?;

        Ok(Self {
            http,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            units: units.into(),
            timeout,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let api_key = config.get_api_key()?;
        Self::new(&config.weather_endpoint, api_key, &config.units, config.timeout())
    }

    fn describe(&self, err: reqwest::Error) -> FarmVisionError {
        if err.is_timeout() {
            FarmVisionError::WeatherFetch(format!(
                "request timed out after {}s",
                self.timeout.as_secs()
            ))
        } else {
            FarmVisionError::WeatherFetch(err.to_string())
        }
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherClient {
    async fn fetch_forecast(&self, location: &str) -> Result<ForecastPayload> {
        debug!(location, endpoint = %self.endpoint, "Requesting forecast");

        let response = self
            .http
            .get(&self.endpoint)
            .query(&[
                ("q", location),
                ("appid", self.api_key.as_str()),
                ("units", self.units.as_str()),
            ])
            .send()
            .await
            .map_err(|e| self.describe(e))?;

        let status = response.status();
        if !status.is_success() {
            warn!(location, status = status.as_u16(), "Forecast request rejected");
            return Err(FarmVisionError::WeatherUnavailable(status.as_u16()));
        }

        response
            .json::<ForecastPayload>()
            .await
            .map_err(|e| self.describe(e))
    }
}
