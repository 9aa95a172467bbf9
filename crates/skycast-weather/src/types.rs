use serde::{Deserialize, Serialize};
use std::fmt;

/// Display unit system. Only affects rendering; reports are always metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    #[default]
    Metric,
    Imperial,
}

impl UnitSystem {
    /// Parse a unit name. Anything other than "imperial" is metric.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "imperial" => Self::Imperial,
            _ => Self::Metric,
        }
    }

    /// The other unit system
    pub fn toggled(self) -> Self {
        match self {
            Self::Metric => Self::Imperial,
            Self::Imperial => Self::Metric,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Metric => "metric",
            Self::Imperial => "imperial",
        }
    }

    pub fn temperature_symbol(&self) -> &'static str {
        match self {
            Self::Metric => "°C",
            Self::Imperial => "°F",
        }
    }

    pub fn wind_speed_unit(&self) -> &'static str {
        match self {
            Self::Metric => "m/s",
            Self::Imperial => "mph",
        }
    }
}

impl From<&str> for UnitSystem {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Geographic position in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

/// What to look up: a city by name or a position
#[derive(Debug, Clone, PartialEq)]
pub enum LocationQuery {
    City(String),
    Coordinates(Coordinates),
}

impl fmt::Display for LocationQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::City(name) => f.write_str(name),
            Self::Coordinates(coords) => coords.fmt(f),
        }
    }
}

/// Current conditions for one location, in metric units.
///
/// Timestamps are seconds since the Unix epoch; `utc_offset_seconds` is the
/// location's shift from UTC.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub location_name: String,
    pub observed_at_utc: i64,
    pub utc_offset_seconds: i64,
    pub condition_code: Option<i32>,
    pub condition_text: String,
    pub temperature_c: f64,
    pub feels_like_c: f64,
    pub min_temperature_c: f64,
    pub max_temperature_c: f64,
    pub humidity_pct: u8,
    pub wind_speed_mps: f64,
    pub pressure_hpa: u32,
    pub cloudiness_pct: u8,
    pub sunrise_utc: i64,
    pub sunset_utc: i64,
}

/// Location errors
#[derive(Debug, thiserror::Error)]
pub enum LocationError {
    #[error("Invalid coordinates: {0}")]
    Invalid(Coordinates),
    #[error("No position available")]
    ServiceUnavailable,
}

/// Weather provider errors
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Location error: {0}")]
    Location(#[from] LocationError),
    #[error("City not found: {0}")]
    CityNotFound(String),
    #[error("No city name given")]
    EmptyCity,
    #[error("Invalid API key")]
    InvalidApiKey,
    #[error("Rate limited by the weather service")]
    RateLimited,
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
    #[error("Parse error: {0}")]
    Parse(String),
}

impl WeatherError {
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::CityNotFound(_) => "City not found. Please enter a valid city.",
            Self::EmptyCity => "Please enter a city name.",
            Self::InvalidApiKey => "Weather API key is invalid. Check settings.",
            Self::RateLimited => "Too many requests. Please wait and try again.",
            Self::Location(_) => "Your location is unavailable. Search for a city instead.",
            Self::Network(_) | Self::Api { .. } | Self::Parse(_) => {
                "Unable to fetch weather data."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_from_name() {
        assert_eq!(UnitSystem::from_name("imperial"), UnitSystem::Imperial);
        assert_eq!(UnitSystem::from_name(" IMPERIAL "), UnitSystem::Imperial);
        assert_eq!(UnitSystem::from_name("metric"), UnitSystem::Metric);
    }

    #[test]
    fn test_unknown_unit_is_metric() {
        assert_eq!(UnitSystem::from_name("kelvin"), UnitSystem::Metric);
        assert_eq!(UnitSystem::from_name(""), UnitSystem::Metric);
        assert_eq!(UnitSystem::from("standard"), UnitSystem::Metric);
    }

    #[test]
    fn test_unit_toggle() {
        assert_eq!(UnitSystem::Metric.toggled(), UnitSystem::Imperial);
        assert_eq!(UnitSystem::Imperial.toggled(), UnitSystem::Metric);
    }

    #[test]
    fn test_unit_labels() {
        assert_eq!(UnitSystem::Metric.temperature_symbol(), "°C");
        assert_eq!(UnitSystem::Imperial.temperature_symbol(), "°F");
        assert_eq!(UnitSystem::Imperial.wind_speed_unit(), "mph");
        assert_eq!(UnitSystem::Imperial.to_string(), "imperial");
    }

    #[test]
    fn test_coordinates_validity() {
        assert!(Coordinates::new(51.5, -0.12).is_valid());
        assert!(Coordinates::new(-90.0, 180.0).is_valid());
        assert!(!Coordinates::new(90.5, 0.0).is_valid());
        assert!(!Coordinates::new(0.0, -180.1).is_valid());
    }

    #[test]
    fn test_query_display() {
        assert_eq!(LocationQuery::City("Paris".into()).to_string(), "Paris");
        assert_eq!(
            LocationQuery::Coordinates(Coordinates::new(1.0, -2.5)).to_string(),
            "1.0000, -2.5000"
        );
    }

    #[test]
    fn test_error_user_messages() {
        assert!(WeatherError::CityNotFound("x".into())
            .user_message()
            .contains("City not found"));
        assert!(WeatherError::Parse("bad".into())
            .user_message()
            .contains("Unable to fetch"));
    }
}
