//! 天気予報の抽出ロジック
//!
//! 複数日の予報ペイロードから「明日」の分だけを取り出し、
//! 最低/最高気温・最頻の天気・農作業アドバイスを導出する。
//! 時刻はペイロードのUnix時刻を指定オフセットの現地時刻に変換して日付判定する。

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

/// 高温注意のしきい値（℃、これを超えると該当）
pub const HEAT_STRESS_CELSIUS: f64 = 35.0;
/// 低温注意のしきい値（℃、これ未満で該当）
pub const COLD_CELSIUS: f64 = 15.0;

/// 予報APIのレスポンス（使うフィールドのみ）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ForecastPayload {
    #[serde(default)]
    pub list: Vec<ForecastEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastEntry {
    /// Unix時刻（秒）
    pub dt: i64,
    pub main: MainReading,
    #[serde(default)]
    pub weather: Vec<WeatherCondition>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MainReading {
    pub temp: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherCondition {
    pub description: String,
}

impl ForecastEntry {
    /// 現地時刻のサンプルに変換（範囲外の時刻はNone）
    pub fn sample(&self, offset: FixedOffset) -> Option<ForecastSample> {
        let timestamp = DateTime::from_timestamp(self.dt, 0)?.with_timezone(&offset);
        let description = self
            .weather
            .first()
            .map(|w| w.description.clone())
            .unwrap_or_default();

        Some(ForecastSample {
            timestamp,
            temperature: self.main.temp,
            description,
        })
    }
}

/// 予報1件
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastSample {
    pub timestamp: DateTime<FixedOffset>,
    pub temperature: f64,
    pub description: String,
}

/// 農作業アドバイス
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FarmingTip {
    ReduceIrrigation,
    HeatStress,
    ColdProtection,
}

impl FarmingTip {
    pub fn message(&self) -> &'static str {
        match self {
            FarmingTip::ReduceIrrigation => "Rain expected tomorrow, reduce irrigation.",
            FarmingTip::HeatStress => "High temp tomorrow, ensure proper watering.",
            FarmingTip::ColdProtection => "Cold conditions tomorrow, protect seedlings.",
        }
    }
}

/// 気温推移の1点
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    /// 現地時刻 HH:MM
    pub time: String,
    pub temperature: f64,
}

/// 明日の天気まとめ
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherSummary {
    pub date: NaiveDate,
    pub min_temp: f64,
    pub max_temp: f64,
    pub dominant_condition: String,
    pub tip: Option<FarmingTip>,
    pub trend: Vec<TrendPoint>,
}

/// 指定日の予報だけを抽出（ペイロード順を維持）
pub fn samples_for_date(
    payload: &ForecastPayload,
    date: NaiveDate,
    offset: FixedOffset,
) -> Vec<ForecastSample> {
    payload
        .list
        .iter()
        .filter_map(|entry| entry.sample(offset))
        .filter(|s| s.timestamp.date_naive() == date)
        .collect()
}

/// 最頻の天気（同数なら先に出現した方）
pub fn dominant_condition<'a, I>(descriptions: I) -> Option<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for d in descriptions {
        match counts.iter_mut().find(|(seen, _)| *seen == d) {
            Some(entry) => entry.1 += 1,
            None => counts.push((d, 1)),
        }
    }

    let mut best: Option<(&str, usize)> = None;
    for (d, count) in counts {
        if best.map_or(true, |(_, c)| count > c) {
            best = Some((d, count));
        }
    }
    best.map(|(d, _)| d.to_string())
}

/// アドバイス選択（雨 → 高温 → 低温の順で最初に該当したもの）
pub fn select_tip(samples: &[ForecastSample], min_temp: f64, max_temp: f64) -> Option<FarmingTip> {
    let rain = samples
        .iter()
        .any(|s| s.description.to_lowercase().contains("rain"));

    if rain {
        Some(FarmingTip::ReduceIrrigation)
    } else if max_temp > HEAT_STRESS_CELSIUS {
        Some(FarmingTip::HeatStress)
    } else if min_temp < COLD_CELSIUS {
        Some(FarmingTip::ColdProtection)
    } else {
        None
    }
}

/// 明日の天気をまとめる。明日の予報がなければNone
pub fn tomorrow_summary(
    payload: &ForecastPayload,
    today: NaiveDate,
    offset: FixedOffset,
) -> Option<WeatherSummary> {
    let tomorrow = today.succ_opt()?;
    let samples = samples_for_date(payload, tomorrow, offset);
    if samples.is_empty() {
        return None;
    }

    let min_temp = samples
        .iter()
        .map(|s| s.temperature)
        .fold(f64::INFINITY, f64::min);
    let max_temp = samples
        .iter()
        .map(|s| s.temperature)
        .fold(f64::NEG_INFINITY, f64::max);
    let dominant = dominant_condition(samples.iter().map(|s| s.description.as_str()))?;
    let tip = select_tip(&samples, min_temp, max_temp);

    let trend = samples
        .iter()
        .map(|s| TrendPoint {
            time: s.timestamp.format("%H:%M").to_string(),
            temperature: s.temperature,
        })
        .collect();

    Some(WeatherSummary {
        date: tomorrow,
        min_temp,
        max_temp,
        dominant_condition: dominant,
        tip,
        trend,
    })
}
