//! OpenWeatherMap "current weather" response shapes.
//! See: https://openweathermap.org/current#fields_json

use serde::Deserialize;

use crate::types::{WeatherError, WeatherReport};

#[derive(Debug, Deserialize)]
pub struct CurrentWeatherResponse {
    pub name: String,
    pub dt: i64,
    pub timezone: i64,
    #[serde(default)]
    pub weather: Vec<ConditionEntry>,
    pub main: MainBlock,
    #[serde(default)]
    pub wind: WindBlock,
    #[serde(default)]
    pub clouds: CloudsBlock,
    pub sys: SysBlock,
}

#[derive(Debug, Deserialize)]
pub struct ConditionEntry {
    pub id: i32,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct MainBlock {
    pub temp: f64,
    pub feels_like: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    pub pressure: u32,
    pub humidity: u8,
}

#[derive(Debug, Default, Deserialize)]
pub struct WindBlock {
    #[serde(default)]
    pub speed: f64,
}

#[derive(Debug, Default, Deserialize)]
pub struct CloudsBlock {
    #[serde(default)]
    pub all: u8,
}

#[derive(Debug, Deserialize)]
pub struct SysBlock {
    pub sunrise: i64,
    pub sunset: i64,
}

/// Error body returned alongside non-2xx statuses, e.g. `{"cod":"404","message":"city not found"}`
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub message: Option<String>,
}

impl TryFrom<CurrentWeatherResponse> for WeatherReport {
    type Error = WeatherError;

    fn try_from(resp: CurrentWeatherResponse) -> Result<Self, Self::Error> {
        let readings = [
            ("main.temp", resp.main.temp),
            ("main.feels_like", resp.main.feels_like),
            ("main.temp_min", resp.main.temp_min),
            ("main.temp_max", resp.main.temp_max),
            ("wind.speed", resp.wind.speed),
        ];
        if let Some((field, _)) = readings.iter().find(|(_, v)| !v.is_finite()) {
            return Err(WeatherError::Parse(format!("{} is not a finite number", field)));
        }

        // Only the primary condition is displayed
        let condition = resp.weather.into_iter().next();

        Ok(WeatherReport {
            location_name: resp.name,
            observed_at_utc: resp.dt,
            utc_offset_seconds: resp.timezone,
            condition_code: condition.as_ref().map(|c| c.id),
            condition_text: condition.map(|c| c.description).unwrap_or_default(),
            temperature_c: resp.main.temp,
            feels_like_c: resp.main.feels_like,
            min_temperature_c: resp.main.temp_min,
            max_temperature_c: resp.main.temp_max,
            humidity_pct: resp.main.humidity,
            wind_speed_mps: resp.wind.speed,
            pressure_hpa: resp.main.pressure,
            cloudiness_pct: resp.clouds.all,
            sunrise_utc: resp.sys.sunrise,
            sunset_utc: resp.sys.sunset,
        })
    }
}
