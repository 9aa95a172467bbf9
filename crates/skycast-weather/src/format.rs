//! Unit conversion and local time formatting.
//!
//! Local times are computed from the location's UTC offset, never from the
//! zone of the machine running the code.

use chrono::{DateTime, NaiveDateTime};

use crate::types::UnitSystem;

const MPS_TO_MPH: f64 = 2.236_936_292_054_402;

pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.0) * 5.0 / 9.0
}

pub fn meters_per_sec_to_mph(speed: f64) -> f64 {
    speed * MPS_TO_MPH
}

/// Wall-clock time at the location for `timestamp_utc`, or `None` if out of range
fn shifted(timestamp_utc: i64, utc_offset_seconds: i64) -> Option<NaiveDateTime> {
    let local = timestamp_utc.checked_add(utc_offset_seconds)?;
    DateTime::from_timestamp(local, 0).map(|dt| dt.naive_utc())
}

/// Current local weekday and time at the report's location, e.g. `Thursday 1:00 AM`.
///
/// The observation timestamp is advanced by the time elapsed since it was
/// taken, then shifted by the location's offset. Returns an empty string if
/// the instant cannot be represented.
pub fn local_date_time(observed_at_utc: i64, utc_offset_seconds: i64, now_utc: i64) -> String {
    now_utc
        .checked_sub(observed_at_utc)
        .and_then(|elapsed| observed_at_utc.checked_add(elapsed))
        .and_then(|adjusted| shifted(adjusted, utc_offset_seconds))
        .map(|dt| dt.format("%A %-I:%M %p").to_string())
        .unwrap_or_default()
}

/// Local time of day for a fixed instant such as sunrise, e.g. `6:42 AM`
pub fn local_time(timestamp_utc: i64, utc_offset_seconds: i64) -> String {
    shifted(timestamp_utc, utc_offset_seconds)
        .map(|dt| dt.format("%-I:%M %p").to_string())
        .unwrap_or_default()
}

/// Temperature for display with one decimal, converted when imperial
pub fn format_temperature(celsius: f64, unit: UnitSystem) -> String {
    let value = match unit {
        UnitSystem::Metric => celsius,
        UnitSystem::Imperial => celsius_to_fahrenheit(celsius),
    };
    format!("{:.1}{}", value, unit.temperature_symbol())
}

pub fn format_wind_speed(meters_per_sec: f64, unit: UnitSystem) -> String {
    let value = match unit {
        UnitSystem::Metric => meters_per_sec,
        UnitSystem::Imperial => meters_per_sec_to_mph(meters_per_sec),
    };
    format!("{:.1} {}", value, unit.wind_speed_unit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_celsius_to_fahrenheit_fixed_points() {
        assert_eq!(celsius_to_fahrenheit(0.0), 32.0);
        assert_eq!(celsius_to_fahrenheit(100.0), 212.0);
        assert_eq!(celsius_to_fahrenheit(-40.0), -40.0);
    }

    #[test]
    fn test_no_rounding() {
        let f = celsius_to_fahrenheit(21.37);
        assert!((f - 70.466).abs() < 1e-9);
    }

    #[test]
    fn test_round_trip() {
        for c in [-273.15, -12.5, 0.0, 3.3, 21.37, 36.6, 100.0, 1234.5678] {
            let back = fahrenheit_to_celsius(celsius_to_fahrenheit(c));
            assert!((back - c).abs() < 1e-9, "{c} came back as {back}");
        }
    }

    #[test]
    fn test_wind_speed_conversion() {
        assert!((meters_per_sec_to_mph(1.0) - 2.2369).abs() < 1e-4);
        assert_eq!(meters_per_sec_to_mph(0.0), 0.0);
    }

    #[test]
    fn test_local_time_epoch() {
        assert_eq!(local_time(0, 0), "12:00 AM");
    }

    #[test]
    fn test_local_time_positive_offset() {
        assert_eq!(local_time(0, 3600), "1:00 AM");
        assert_eq!(local_time(0, 13 * 3600 + 45 * 60), "1:45 PM");
    }

    #[test]
    fn test_local_time_negative_offset_crosses_midnight() {
        assert_eq!(local_time(0, -3600), "11:00 PM");
    }

    #[test]
    fn test_local_time_offset_beyond_twelve_hours() {
        // UTC+14 (Kiribati) and UTC-12
        assert_eq!(local_time(0, 14 * 3600), "2:00 PM");
        assert_eq!(local_time(0, -12 * 3600), "12:00 PM");
    }

    #[test]
    fn test_local_date_time_without_elapsed_time() {
        // 1970-01-01 was a Thursday
        assert_eq!(local_date_time(0, 0, 0), "Thursday 12:00 AM");
        assert_eq!(local_date_time(0, -3600, 0), "Wednesday 11:00 PM");

        let observed = 1_700_000_000;
        let offset = 19_800;
        assert_eq!(
            local_date_time(observed, offset, observed),
            shifted(observed, offset)
                .map(|dt| dt.format("%A %-I:%M %p").to_string())
                .unwrap_or_default()
        );
    }

    #[test]
    fn test_local_date_time_advances_by_elapsed_time() {
        // Observed at midnight UTC, viewed 90 minutes later in UTC+2
        assert_eq!(local_date_time(0, 7200, 5400), "Thursday 3:30 AM");
        // Viewed a full day later
        assert_eq!(local_date_time(0, 0, 86_400), "Friday 12:00 AM");
    }

    #[test]
    fn test_known_instant() {
        // 2023-11-14T22:13:20Z
        assert_eq!(local_time(1_700_000_000, 0), "10:13 PM");
        assert_eq!(local_date_time(1_700_000_000, 3600, 1_700_000_000), "Tuesday 11:13 PM");
    }

    #[test]
    fn test_out_of_range_renders_empty() {
        assert_eq!(local_time(i64::MAX, 1), "");
        assert_eq!(local_date_time(0, 0, i64::MAX), "");
    }

    #[test]
    fn test_format_temperature() {
        assert_eq!(format_temperature(21.46, UnitSystem::Metric), "21.5°C");
        assert_eq!(format_temperature(0.0, UnitSystem::Imperial), "32.0°F");
        assert_eq!(format_temperature(21.5, UnitSystem::Imperial), "70.7°F");
    }

    #[test]
    fn test_format_wind_speed() {
        assert_eq!(format_wind_speed(3.6, UnitSystem::Metric), "3.6 m/s");
        assert_eq!(format_wind_speed(3.6, UnitSystem::Imperial), "8.1 mph");
    }
}
