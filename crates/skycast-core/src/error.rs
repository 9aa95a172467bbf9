//! Error types shared by the SkyCast crates.
//!
//! Every variant carries the technical detail for logs, and `user_message()`
//! gives the short line printed to the terminal.

use thiserror::Error;

/// Error surfaced by the application shell.
///
/// Lower layers convert into this at the edge; print `user_message()`,
/// log the `Display` form.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Weather lookup error: {0}")]
    Weather(#[from] WeatherError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(anyhow::Error),
}

impl AppError {
    /// Returns the line to print for this error.
    pub fn user_message(&self) -> &'static str {
        match self {
            AppError::Network(e) => e.user_message(),
            AppError::Config(e) => e.user_message(),
            AppError::Weather(e) => e.user_message(),
            AppError::Io(_) => "Could not read or write a local file.",
            AppError::Other(_) => "Something went wrong. Run with RUST_LOG=debug for details.",
        }
    }
}

impl From<anyhow::Error> for AppError {
    /// Recovers the typed error behind an `anyhow` chain, including one
    /// wrapped with `.context(..)`.
    fn from(err: anyhow::Error) -> Self {
        let err = match err.downcast::<ConfigError>() {
            Ok(config) => return AppError::Config(config),
            Err(err) => err,
        };
        match err.downcast::<std::io::Error>() {
            Ok(io) => AppError::Io(io),
            Err(err) => AppError::Other(err),
        }
    }
}

/// Transport failures talking to the weather service.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Request timed out")]
    Timeout,

    #[error("HTTP {status}: {message}")]
    ServerError { status: u16, message: String },

    #[error("Unreadable response: {0}")]
    InvalidResponse(String),
}

impl NetworkError {
    /// Returns the line to print for this error.
    pub fn user_message(&self) -> &'static str {
        match self {
            NetworkError::ConnectionFailed(_) => "No connection to the weather service.",
            NetworkError::Timeout => "The weather service took too long to answer.",
            NetworkError::ServerError { status, .. } if *status >= 500 => {
                "The weather service is having problems. Try again later."
            }
            NetworkError::ServerError { .. } => "The weather service rejected the request.",
            NetworkError::InvalidResponse(_) => "The weather service sent data we could not read.",
        }
    }
}

/// Problems with the config file or the settings it provides.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Configuration parse error: {0}")]
    ParseError(String),

    #[error("No API key in weather.api_key or OPENWEATHER_API_KEY")]
    MissingApiKey,
}

impl ConfigError {
    /// Returns the line to print for this error.
    pub fn user_message(&self) -> &'static str {
        match self {
            ConfigError::Invalid(_) => "The config file has an invalid setting.",
            ConfigError::ParseError(_) => "The config file is not valid TOML.",
            ConfigError::MissingApiKey => {
                "No API key configured. Set OPENWEATHER_API_KEY or weather.api_key in the config file."
            }
        }
    }
}

/// Lookup outcomes the user can act on.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("City not found: {0:?}")]
    CityNotFound(String),

    #[error("No city name given")]
    EmptyCity,

    #[error("Location unavailable: {0}")]
    LocationUnavailable(String),

    #[error("Weather API returned {0}")]
    ApiError(String),

    #[error("Invalid API key")]
    InvalidApiKey,

    #[error("Rate limited by the weather service")]
    RateLimited,

    #[error("Service unavailable")]
    ServiceUnavailable,
}

impl WeatherError {
    /// Returns the line to print for this error.
    pub fn user_message(&self) -> &'static str {
        match self {
            WeatherError::CityNotFound(_) => "City not found. Please enter a valid city.",
            WeatherError::EmptyCity => "Please enter a city name.",
            WeatherError::LocationUnavailable(_) => {
                "Your location is unavailable. Search for a city instead."
            }
            WeatherError::ApiError(_) => "Unable to fetch weather data.",
            WeatherError::InvalidApiKey => "The weather API key was rejected.",
            WeatherError::RateLimited => "Too many requests. Wait a minute and try again.",
            WeatherError::ServiceUnavailable => "The weather service is down. Try again later.",
        }
    }
}

/// Classify a reqwest failure as a [`NetworkError`].
pub trait ReqwestErrorExt {
    fn into_network_error(self) -> NetworkError;
}

impl ReqwestErrorExt for reqwest::Error {
    fn into_network_error(self) -> NetworkError {
        let detail = self.to_string();
        match self.status() {
            _ if self.is_timeout() => NetworkError::Timeout,
            _ if self.is_decode() => NetworkError::InvalidResponse(detail),
            Some(status) if !self.is_connect() => NetworkError::ServerError {
                status: status.as_u16(),
                message: detail,
            },
            _ => NetworkError::ConnectionFailed(detail),
        }
    }
}
