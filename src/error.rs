use thiserror::Error;

#[derive(Error, Debug)]
pub enum FarmVisionError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Weather API key is not set. Run `farm-vision config --set-api-key YOUR_KEY` or set OPENWEATHER_API_KEY")]
    MissingApiKey,

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Folder not found: {0}")]
    FolderNotFound(String),

    #[error("Unsupported image (JPEG or PNG only): {0}")]
    UnsupportedImage(String),

    #[error("Could not read image: {0}")]
    ImageLoad(String),

    #[error("Please fill in the {0} field")]
    ValidationUnavailable(&'static str),

    #[error("The {field} field must be at least {min} characters")]
    FieldTooShort { field: &'static str, min: usize },

    #[error("Phone number must be at least {0} digits and contain only digits")]
    InvalidPhone(usize),

    #[error("Please register first")]
    NotRegistered,

    #[error("Please enter a location to get the weather forecast")]
    LocationRequired,

    #[error("Unable to fetch weather data (HTTP {0}). Please check city name or API key")]
    WeatherUnavailable(u16),

    #[error("Error fetching weather: {0}")]
    WeatherFetch(String),

    #[error("No forecast data available for tomorrow")]
    NoForecastData,

    #[error("No market prices for crop: {0}")]
    UnknownCrop(String),

    #[error("Classifier error: {0}")]
    Classifier(String),

    #[error("Unknown page: {0}")]
    InvalidPage(String),

    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

impl FarmVisionError {
    /// 外部の天気API起因のエラーか
    pub fn is_fetch_failure(&self) -> bool {
        matches!(
            self,
            FarmVisionError::WeatherUnavailable(_) | FarmVisionError::WeatherFetch(_)
        )
    }

    /// 画面にメッセージを出してセッションを継続できるエラーか
    pub fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            FarmVisionError::Io(_) | FarmVisionError::Prompt(_) | FarmVisionError::InvalidPage(_)
        )
    }
}

impl From<farm_vision_common::Error> for FarmVisionError {
    fn from(err: farm_vision_common::Error) -> Self {
        match err {
            farm_vision_common::Error::UnknownCrop(crop) => FarmVisionError::UnknownCrop(crop),
        }
    }
}

pub type Result<T> = std::result::Result<T, FarmVisionError>;
