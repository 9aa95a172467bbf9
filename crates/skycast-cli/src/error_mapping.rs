//! Maps weather crate errors to skycast_core::AppError for consistent user-facing messages.

use skycast_core::{AppError, NetworkError, ReqwestErrorExt, WeatherError};
use skycast_weather::WeatherError as LookupError;

pub fn from_lookup_error(e: LookupError) -> AppError {
    match e {
        LookupError::Network(err) => AppError::Network(err.into_network_error()),
        LookupError::Location(err) => {
            AppError::Weather(WeatherError::LocationUnavailable(err.to_string()))
        }
        LookupError::CityNotFound(city) => AppError::Weather(WeatherError::CityNotFound(city)),
        LookupError::EmptyCity => AppError::Weather(WeatherError::EmptyCity),
        LookupError::InvalidApiKey => AppError::Weather(WeatherError::InvalidApiKey),
        LookupError::RateLimited => AppError::Weather(WeatherError::RateLimited),
        LookupError::Api { status, .. } if status >= 500 => {
            AppError::Weather(WeatherError::ServiceUnavailable)
        }
        LookupError::Api { status, message } => {
            AppError::Weather(WeatherError::ApiError(format!("{}: {}", status, message)))
        }
        LookupError::Parse(msg) => AppError::Network(NetworkError::InvalidResponse(msg)),
    }
}
