//! Lookup session state: search text, selected unit, and the fetch lifecycle.
//!
//! The session performs no I/O. The caller runs the request between
//! [`WeatherSession::begin`] and [`WeatherSession::finish`].

use crate::types::{LocationQuery, UnitSystem, WeatherError, WeatherReport};
use crate::view::WeatherView;

const CITY_NOT_FOUND_MESSAGE: &str = "City not found. Please enter a valid city.";
const FETCH_FAILED_MESSAGE: &str = "Unable to fetch weather data.";

#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState {
    #[default]
    Idle,
    Loading(LocationQuery),
    Loaded(WeatherReport),
    Failed(String),
}

#[derive(Debug, Clone, Default)]
pub struct WeatherSession {
    search_text: String,
    unit: UnitSystem,
    state: FetchState,
}

impl WeatherSession {
    pub fn new(unit: UnitSystem) -> Self {
        Self {
            unit,
            ..Self::default()
        }
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    pub fn unit(&self) -> UnitSystem {
        self.unit
    }

    /// Switch between metric and imperial; returns the new unit
    pub fn toggle_unit(&mut self) -> UnitSystem {
        self.unit = self.unit.toggled();
        self.unit
    }

    pub fn state(&self) -> &FetchState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, FetchState::Loading(_))
    }

    pub fn report(&self) -> Option<&WeatherReport> {
        match &self.state {
            FetchState::Loaded(report) => Some(report),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.state {
            FetchState::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }

    /// City query for the current search text, or `None` when it is blank
    pub fn search_query(&self) -> Option<LocationQuery> {
        let city = self.search_text.trim();
        (!city.is_empty()).then(|| LocationQuery::City(city.to_string()))
    }

    /// Mark a request for `query` as in flight
    pub fn begin(&mut self, query: LocationQuery) {
        tracing::debug!("Loading weather for {}", query);
        self.state = FetchState::Loading(query);
    }

    /// Record the outcome of the in-flight request.
    ///
    /// On success the report is kept and a city search clears the search
    /// text. On failure the previous report is dropped, a user-facing message
    /// is stored, and the error is handed back for logging.
    pub fn finish(
        &mut self,
        result: Result<WeatherReport, WeatherError>,
    ) -> Result<(), WeatherError> {
        let query = match std::mem::take(&mut self.state) {
            FetchState::Loading(query) => Some(query),
            _ => None,
        };

        match result {
            Ok(report) => {
                if matches!(query, Some(LocationQuery::City(_))) {
                    self.search_text.clear();
                }
                self.state = FetchState::Loaded(report);
                Ok(())
            }
            Err(err) => {
                self.state = FetchState::Failed(failure_message(query.as_ref(), &err).to_string());
                Err(err)
            }
        }
    }

    /// Display strings for the loaded report at `now_utc`
    pub fn view(&self, now_utc: i64) -> Option<WeatherView> {
        self.report()
            .map(|report| WeatherView::new(report, self.unit, now_utc))
    }
}

fn failure_message(query: Option<&LocationQuery>, err: &WeatherError) -> &'static str {
    match err {
        WeatherError::InvalidApiKey
        | WeatherError::RateLimited
        | WeatherError::EmptyCity
        | WeatherError::Location(_) => err.user_message(),
        _ => match query {
            Some(LocationQuery::City(_)) => CITY_NOT_FOUND_MESSAGE,
            _ => FETCH_FAILED_MESSAGE,
        },
    }
}
