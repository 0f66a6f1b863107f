//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use farm_vision::error::FarmVisionError;
use farm_vision::scanner;
use std::path::Path;
use tempfile::tempdir;

/// 存在しないフォルダをスキャンした場合
#[test]
fn test_scan_nonexistent_folder() {
    let result = scanner::scan_folder(Path::new("/nonexistent/path/12345"));
    let err = result.unwrap_err();
    assert!(matches!(err, FarmVisionError::FolderNotFound(_)));
}

/// 画像のないフォルダは空のVec
#[test]
fn test_load_images_folder_without_images() {
    let dir = tempdir().expect("Failed to create temp dir");
    std::fs::write(dir.path().join("notes.txt"), "hello").unwrap();
    std::fs::write(dir.path().join("data.json"), "{}").unwrap();

    let batch = scanner::load_images(dir.path()).unwrap();
    assert!(batch.images.is_empty());
    assert!(batch.skipped.is_empty());
}

/// Display実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        FarmVisionError::Config("テスト設定エラー".to_string()),
        FarmVisionError::FileNotFound("leaf.jpg".to_string()),
        FarmVisionError::UnsupportedImage("leaf.gif".to_string()),
        FarmVisionError::ValidationUnavailable("phone"),
        FarmVisionError::FieldTooShort { field: "village", min: 2 },
        FarmVisionError::InvalidPhone(10),
        FarmVisionError::Classifier("no disease label".to_string()),
        FarmVisionError::NotRegistered,
        FarmVisionError::LocationRequired,
        FarmVisionError::WeatherUnavailable(401),
        FarmVisionError::WeatherFetch("connection refused".to_string()),
        FarmVisionError::NoForecastData,
        FarmVisionError::UnknownCrop("Wheat".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
        assert!(err.is_recoverable(), "セッションを継続できるべき: {:?}", err);
    }
}

#[test]
fn test_registration_messages() {
    let err = FarmVisionError::FieldTooShort { field: "village", min: 2 };
    assert_eq!(err.to_string(), "The village field must be at least 2 characters");

    let err = FarmVisionError::InvalidPhone(10);
    assert!(err.to_string().contains("at least 10 digits"));
}

#[test]
fn test_missing_api_key_message() {
    let display = format!("{}", FarmVisionError::MissingApiKey);
    assert!(display.contains("farm-vision config"));
    assert!(display.contains("OPENWEATHER_API_KEY"));
}

#[test]
fn test_fetch_failure_grouping() {
    assert!(FarmVisionError::WeatherUnavailable(500).is_fetch_failure());
    assert!(FarmVisionError::WeatherFetch("timeout".into()).is_fetch_failure());
    assert!(!FarmVisionError::NoForecastData.is_fetch_failure());
    assert!(!FarmVisionError::LocationRequired.is_fetch_failure());
}

#[test]
fn test_weather_unavailable_message() {
    let display = format!("{}", FarmVisionError::WeatherUnavailable(404));
    assert!(display.contains("404"));
    assert!(display.contains("check city name or API key"));
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: FarmVisionError = io_err.into();

    assert!(matches!(err, FarmVisionError::Io(_)));
    assert!(!err.is_recoverable());
    assert!(format!("{}", err).contains("IO"));
}

/// 共通ライブラリのエラーからの変換
#[test]
fn test_common_error_conversion() {
    let err: FarmVisionError = "Sugarcane"
        .parse::<farm_vision::common::Crop>()
        .map_err(FarmVisionError::from)
        .unwrap_err();
    assert!(matches!(err, FarmVisionError::UnknownCrop(ref c) if c == "Sugarcane"));
    assert!(err.is_recoverable());

    let table = farm_vision::common::MarketPriceTable::standard();
    let err: FarmVisionError = table
        .best_market(farm_vision::common::Crop::Maize)
        .map_err(FarmVisionError::from)
        .unwrap_err();
    assert_eq!(err.to_string(), "No market prices for crop: Maize");
}
