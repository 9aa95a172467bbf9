//! Integration tests for WeatherProvider using wiremock.
//!
//! These tests verify request shape and status handling against a mock HTTP server.

use std::time::Duration;

use skycast_weather::{
    resolve, ConditionCategory, Coordinates, LocationQuery, UnitSystem, WeatherError,
    WeatherProvider, WeatherSession,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const API_KEY: &str = "test-key";

fn provider(server: &MockServer) -> WeatherProvider {
    WeatherProvider::with_base_url(API_KEY, &server.uri(), Duration::from_secs(5)).unwrap()
}

fn weather_body(name: &str, code: i32, description: &str) -> serde_json::Value {
    serde_json::json!({
        "coord": {"lon": 139.6917, "lat": 35.6895},
        "weather": [{"id": code, "main": "x", "description": description, "icon": "01d"}],
        "main": {
            "temp": 18.4, "feels_like": 17.9, "temp_min": 16.0, "temp_max": 20.1,
            "pressure": 1009, "humidity": 72
        },
        "wind": {"speed": 2.57},
        "clouds": {"all": 20},
        "dt": 1_700_000_000,
        "sys": {"sunrise": 1_699_995_600, "sunset": 1_700_033_400},
        "timezone": 32_400,
        "name": name,
        "cod": 200
    })
}

#[tokio::test]
async fn test_fetch_by_city_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("q", "Tokyo"))
        .and(query_param("appid", API_KEY))
        .and(query_param("units", "metric"))
        .respond_with(ResponseTemplate::new(200).set_body_json(weather_body(
            "Tokyo",
            801,
            "few clouds",
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    let report = provider(&mock_server)
        .fetch(&LocationQuery::City("Tokyo".into()))
        .await
        .unwrap();

    assert_eq!(report.location_name, "Tokyo");
    assert_eq!(report.utc_offset_seconds, 32_400);
    assert_eq!(report.condition_code, Some(801));
    assert_eq!(
        resolve(report.condition_code, Some(report.condition_text.as_str())),
        ConditionCategory::Clouds.icon()
    );
}

#[tokio::test]
async fn test_fetch_by_coordinates_sends_lat_lon() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("lat", "35.6895"))
        .and(query_param("lon", "139.6917"))
        .and(query_param("units", "metric"))
        .respond_with(ResponseTemplate::new(200).set_body_json(weather_body(
            "Tokyo",
            500,
            "light rain",
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    let report = provider(&mock_server)
        .fetch(&LocationQuery::Coordinates(Coordinates::new(35.6895, 139.6917)))
        .await
        .unwrap();

    assert_eq!(report.condition_text, "light rain");
}

#[tokio::test]
async fn test_city_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "cod": "404",
            "message": "city not found"
        })))
        .mount(&mock_server)
        .await;

    let result = provider(&mock_server).fetch_by_city("Atlantis").await;

    assert!(matches!(result, Err(WeatherError::CityNotFound(city)) if city == "Atlantis"));
}

#[tokio::test]
async fn test_invalid_api_key() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "cod": 401,
            "message": "Invalid API key."
        })))
        .mount(&mock_server)
        .await;

    let result = provider(&mock_server).fetch_by_city("London").await;

    assert!(matches!(result, Err(WeatherError::InvalidApiKey)));
}

#[tokio::test]
async fn test_rate_limited() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&mock_server)
        .await;

    let result = provider(&mock_server).fetch_by_city("London").await;

    assert!(matches!(result, Err(WeatherError::RateLimited)));
}

#[tokio::test]
async fn test_server_error_carries_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(502).set_body_json(serde_json::json!({
            "cod": "502",
            "message": "upstream unavailable"
        })))
        .mount(&mock_server)
        .await;

    let result = provider(&mock_server).fetch_by_city("London").await;

    match result {
        Err(WeatherError::Api { status, message }) => {
            assert_eq!(status, 502);
            assert_eq!(message, "upstream unavailable");
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_body_is_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let result = provider(&mock_server).fetch_by_city("London").await;

    assert!(matches!(result, Err(WeatherError::Parse(_))));
}

#[tokio::test]
async fn test_session_round_trip_against_server() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("q", "Tokyo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(weather_body(
            "Tokyo",
            800,
            "clear sky",
        )))
        .mount(&mock_server)
        .await;

    let provider = provider(&mock_server);
    let mut session = WeatherSession::new(UnitSystem::Imperial);
    session.set_search_text("Tokyo");
    let query = session.search_query().unwrap();

    session.begin(query.clone());
    let result = provider.fetch(&query).await;
    session.finish(result).unwrap();

    // 2023-11-14T22:13:20Z shifted to UTC+9
    let view = session.view(1_700_000_000).unwrap();
    assert_eq!(view.city, "TOKYO");
    assert_eq!(view.date_time, "Wednesday 7:13 AM");
    assert_eq!(view.icon, ConditionCategory::Clear.icon());
    assert_eq!(view.temperature, "65.1°F");
    assert_eq!(session.search_text(), "");
}
