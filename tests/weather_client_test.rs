//! 天気APIクライアントのテスト（wiremockでHTTPサーバーを模擬）

use chrono::{FixedOffset, NaiveDate, TimeZone};
use farm_vision::common::FarmingTip;
use farm_vision::error::FarmVisionError;
use farm_vision::weather::{weather_report, OpenWeatherClient, WeatherProvider};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn ist() -> FixedOffset {
    FixedOffset::east_opt(5 * 3600 + 30 * 60).unwrap()
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

fn dt(day: u32, hour: u32) -> i64 {
    ist().with_ymd_and_hms(2026, 10, day, hour, 0, 0).unwrap().timestamp()
}

fn entry(day: u32, hour: u32, temp: f64, description: &str) -> serde_json::Value {
    json!({
        "dt": dt(day, hour),
        "main": { "temp": temp, "humidity": 64 },
        "weather": [ { "id": 800, "main": "Clear", "description": description } ]
    })
}

fn client(server: &MockServer, timeout: Duration) -> OpenWeatherClient {
    OpenWeatherClient::new(format!("{}/forecast", server.uri()), "test-key", "metric", timeout).unwrap()
}

#[tokio::test]
async fn test_forecast_summary_from_provider() {
    let server = MockServer::start().await;
    let body = json!({
        "cod": "200",
        "list": [
            entry(19, 23, 26.0, "overcast clouds"),
            entry(20, 5, 30.2, "clear sky"),
            entry(20, 11, 36.1, "clear sky"),
            entry(20, 17, 33.0, "light rain"),
            entry(21, 5, 29.0, "clear sky"),
        ],
        "city": { "name": "Hyderabad", "timezone": 19800 }
    });

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .and(query_param("q", "Hyderabad"))
        .and(query_param("appid", "test-key"))
        .and(query_param("units", "metric"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server, Duration::from_secs(5));
    let summary = weather_report(&client, "  Hyderabad ", today(), ist()).await.unwrap();

    assert_eq!(summary.min_temp, 30.2);
    assert_eq!(summary.max_temp, 36.1);
    assert_eq!(summary.dominant_condition, "clear sky");
    assert_eq!(summary.tip, Some(FarmingTip::ReduceIrrigation));
    assert_eq!(summary.trend.len(), 3);
}

#[tokio::test]
async fn test_non_success_status_is_fetch_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"cod": "404", "message": "city not found"})))
        .mount(&server)
        .await;

    let client = client(&server, Duration::from_secs(5));
    let err = weather_report(&client, "Atlantis", today(), ist()).await.unwrap_err();

    assert!(matches!(err, FarmVisionError::WeatherUnavailable(404)));
    assert!(err.is_fetch_failure());
    assert!(err.is_recoverable());
}

#[tokio::test]
async fn test_malformed_body_is_fetch_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let client = client(&server, Duration::from_secs(5));
    let err = client.fetch_forecast("Hyderabad").await.unwrap_err();
    assert!(matches!(err, FarmVisionError::WeatherFetch(_)));
}

#[tokio::test]
async fn test_timeout_is_fetch_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"list": []}))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let client = client(&server, Duration::from_secs(1));
    let err = client.fetch_forecast("Hyderabad").await.unwrap_err();
    match err {
        FarmVisionError::WeatherFetch(msg) => assert!(msg.contains("timed out"), "{}", msg),
        other => panic!("WeatherFetch expected, got {:?}", other),
    }
}

#[tokio::test]
async fn test_no_entries_for_tomorrow() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "list": [entry(21, 9, 28.0, "clear sky"), entry(21, 15, 31.0, "clear sky")]
        })))
        .mount(&server)
        .await;

    let client = client(&server, Duration::from_secs(5));
    let err = weather_report(&client, "Warangal", today(), ist()).await.unwrap_err();
    assert!(matches!(err, FarmVisionError::NoForecastData));
}

#[tokio::test]
async fn test_empty_location_makes_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"list": []})))
        .expect(0)
        .mount(&server)
        .await;

    let client = client(&server, Duration::from_secs(5));
    let err = weather_report(&client, "   ", today(), ist()).await.unwrap_err();
    assert!(matches!(err, FarmVisionError::LocationRequired));
    assert!(server.received_requests().await.unwrap_or_default().is_empty());
}
