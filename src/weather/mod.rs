//! 天気予報
//!
//! 予報の取得は `WeatherProvider` に任せ、明日分の抽出は共通ライブラリで行う。
//! 地名が空ならネットワークにアクセスする前に `LocationRequired` を返す。

mod client;

pub use client::OpenWeatherClient;

use crate::error::{FarmVisionError, Result};
use async_trait::async_trait;
use chrono::{FixedOffset, Local, NaiveDate};
use farm_vision_common::{tomorrow_summary, ForecastPayload, WeatherSummary};
use tracing::debug;

#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn fetch_forecast(&self, location: &str) -> Result<ForecastPayload>;
}

/// 明日の天気まとめを取得
pub async fn weather_report<P>(
    provider: &P,
    location: &str,
    today: NaiveDate,
    offset: FixedOffset,
) -> Result<WeatherSummary>
where
    P: WeatherProvider + ?Sized,
{
    let location = location.trim();
    if location.is_empty() {
        return Err(FarmVisionError::LocationRequired);
    }

    let payload = provider.fetch_forecast(location).await?;
    debug!(location, entries = payload.list.len(), "Forecast received");

    tomorrow_summary(&payload, today, offset).ok_or(FarmVisionError::NoForecastData)
}

/// 現地の今日の日付とUTCオフセット
pub fn local_today() -> (NaiveDate, FixedOffset) {
    let now = Local::now();
    (now.date_naive(), *now.offset())
}
