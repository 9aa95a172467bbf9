use serde::Serialize;
use std::fmt;

use crate::condition::{categorize, ConditionCategory, IconReference};
use crate::format::{format_temperature, format_wind_speed, local_date_time, local_time};
use crate::types::{UnitSystem, WeatherReport};

/// Display strings for one report in one unit system at one instant
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherView {
    pub city: String,
    pub date_time: String,
    pub icon: IconReference,
    pub category: ConditionCategory,
    pub description: String,
    pub temperature: String,
    pub feels_like: String,
    pub min_temperature: String,
    pub max_temperature: String,
    pub sunrise: String,
    pub sunset: String,
    pub humidity: String,
    pub wind_speed: String,
    pub pressure: String,
    pub cloudiness: String,
}

impl WeatherView {
    pub fn new(report: &WeatherReport, unit: UnitSystem, now_utc: i64) -> Self {
        let text = Some(report.condition_text.as_str()).filter(|t| !t.is_empty());
        let category = categorize(report.condition_code, text);
        let offset = report.utc_offset_seconds;

        Self {
            city: report.location_name.to_uppercase(),
            date_time: local_date_time(report.observed_at_utc, offset, now_utc),
            icon: category.icon(),
            category,
            description: report.condition_text.clone(),
            temperature: format_temperature(report.temperature_c, unit),
            feels_like: format_temperature(report.feels_like_c, unit),
            min_temperature: format_temperature(report.min_temperature_c, unit),
            max_temperature: format_temperature(report.max_temperature_c, unit),
            sunrise: local_time(report.sunrise_utc, offset),
            sunset: local_time(report.sunset_utc, offset),
            humidity: format!("{}%", report.humidity_pct),
            wind_speed: format_wind_speed(report.wind_speed_mps, unit),
            pressure: format!("{} hPa", report.pressure_hpa),
            cloudiness: format!("{}%", report.cloudiness_pct),
        }
    }

    /// City and clock line, re-rendered on every clock tick
    pub fn headline(&self) -> String {
        format!("{}  {}", self.city, self.date_time)
    }
}

impl fmt::Display for WeatherView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.headline())?;
        writeln!(f, "{} ({})", self.description, self.category.label())?;
        writeln!(f, "icon: {}", self.icon)?;
        writeln!(f, "{}  feels like: {}", self.temperature, self.feels_like)?;
        writeln!(f)?;
        writeln!(f, " > Sunrise: {}", self.sunrise)?;
        writeln!(f, " > Sunset: {}", self.sunset)?;
        writeln!(f, " > Minimum Temperature: {}", self.min_temperature)?;
        writeln!(f, " > Maximum Temperature: {}", self.max_temperature)?;
        writeln!(f, " > Humidity: {}", self.humidity)?;
        writeln!(f, " > Wind Speed: {}", self.wind_speed)?;
        writeln!(f, " > Pressure: {}", self.pressure)?;
        write!(f, " > Cloudiness: {}", self.cloudiness)
    }
}
