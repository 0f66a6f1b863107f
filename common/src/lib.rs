//! Farm Vision Common Library
//!
//! CLIと他の表示面で共有される型と純粋ロジック（I/Oなし）

pub mod types;
pub mod error;
pub mod field;
pub mod health;
pub mod market;
pub mod weather;

pub use types::{Crop, CropAnalysisResult, FarmerProfile, HealthStatus};
pub use error::{Error, Result};
pub use field::{field_layout, plot_label, PlotStatus, PLOT_COUNT};
pub use health::{advisory_for, HealthTally};
pub use market::{MarketPrice, MarketPriceTable};
pub use weather::{
    tomorrow_summary, FarmingTip, ForecastEntry, ForecastPayload, ForecastSample, TrendPoint,
    WeatherSummary,
};
