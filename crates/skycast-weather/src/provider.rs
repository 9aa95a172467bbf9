//! OpenWeatherMap current-weather client.

use crate::openweather::{CurrentWeatherResponse, ErrorBody};
use crate::types::{Coordinates, LocationQuery, WeatherError, WeatherReport};
use reqwest::{Client, StatusCode};
use std::sync::Arc;
use std::time::Duration;
use tracing::instrument;

pub const OPENWEATHER_API_BASE: &str = "https://api.openweathermap.org/data/2.5";
const USER_AGENT: &str = concat!("SkyCast/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct WeatherProvider {
    client: Arc<Client>,
    api_key: String,
    base_url: String,
}

impl WeatherProvider {
    pub fn new(api_key: impl Into<String>, timeout: Duration) -> Result<Self, WeatherError> {
        Self::with_base_url(api_key, OPENWEATHER_API_BASE, timeout)
    }

    /// Client for an alternative endpoint (mirrors, test servers)
    pub fn with_base_url(
        api_key: impl Into<String>,
        base_url: &str,
        timeout: Duration,
    ) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client: Arc::new(client),
            api_key: api_key.into(),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch current conditions for a city or a position.
    ///
    /// Always requests metric units; conversion happens at display time.
    #[instrument(skip(self), level = "info")]
    pub async fn fetch(&self, query: &LocationQuery) -> Result<WeatherReport, WeatherError> {
        match query {
            LocationQuery::City(name) => self.fetch_by_city(name).await,
            LocationQuery::Coordinates(coords) => self.fetch_by_coordinates(*coords).await,
        }
    }

    pub async fn fetch_by_city(&self, city: &str) -> Result<WeatherReport, WeatherError> {
        let city = city.trim();
        if city.is_empty() {
            return Err(WeatherError::EmptyCity);
        }

        let response = self
            .client
            .get(self.endpoint())
            .query(&[("q", city), ("appid", self.api_key.as_str()), ("units", "metric")])
            .send()
            .await?;

        self.handle_response(response, city).await
    }

    pub async fn fetch_by_coordinates(
        &self,
        coords: Coordinates,
    ) -> Result<WeatherReport, WeatherError> {
        let lat = coords.latitude.to_string();
        let lon = coords.longitude.to_string();

        let response = self
            .client
            .get(self.endpoint())
            .query(&[
                ("lat", lat.as_str()),
                ("lon", lon.as_str()),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await?;

        self.handle_response(response, &coords.to_string()).await
    }

    fn endpoint(&self) -> String {
        format!("{}/weather", self.base_url)
    }

    /// Helper to handle API responses and errors.
    async fn handle_response(
        &self,
        response: reqwest::Response,
        queried: &str,
    ) -> Result<WeatherReport, WeatherError> {
        let status = response.status();

        if status.is_success() {
            let body: CurrentWeatherResponse = response
                .json()
                .await
                .map_err(|e| WeatherError::Parse(format!("JSON parse error: {}", e)))?;
            let report = WeatherReport::try_from(body)?;
            tracing::info!(
                "Fetched weather for {} ({:?} {})",
                report.location_name,
                report.condition_code,
                report.condition_text
            );
            return Ok(report);
        }

        match status {
            StatusCode::UNAUTHORIZED => Err(WeatherError::InvalidApiKey),
            StatusCode::NOT_FOUND => Err(WeatherError::CityNotFound(queried.to_string())),
            StatusCode::TOO_MANY_REQUESTS => Err(WeatherError::RateLimited),
            _ => {
                let text = response.text().await.unwrap_or_default();
                let message = serde_json::from_str::<ErrorBody>(&text)
                    .ok()
                    .and_then(|b| b.message)
                    .unwrap_or(text);
                tracing::debug!("Weather API returned {}: {}", status, message);
                Err(WeatherError::Api {
                    status: status.as_u16(),
                    message,
                })
            }
        }
    }
}
