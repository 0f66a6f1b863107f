//! テキストグラフ
//!
//! 円グラフ・折れ線グラフの代わりに端末用の横棒グラフを描く。

use farm_vision_common::field::PLOTS_PER_ROW;
use farm_vision_common::{HealthTally, PlotStatus, TrendPoint, PLOT_COUNT};

const BAR_WIDTH: usize = 30;

fn bar(fraction: f64, width: usize) -> String {
    let filled = (fraction.clamp(0.0, 1.0) * width as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// 健全/罹病の割合（小数点1桁）
pub fn health_chart(tally: &HealthTally) -> Vec<String> {
    let rows = [
        ("Healthy", tally.healthy, tally.healthy_percent()),
        ("Diseased", tally.diseased, tally.diseased_percent()),
    ];

    rows.iter()
        .map(|(label, count, pct)| {
            format!(
                "{:<9}{} {:>6} ({})",
                label,
                bar(pct / 100.0, BAR_WIDTH),
                HealthTally::format_percent(*pct),
                count
            )
        })
        .collect()
}

/// 気温推移（最低〜最高を棒の長さに割り当て）
pub fn trend_chart(trend: &[TrendPoint]) -> Vec<String> {
    let min = trend.iter().map(|p| p.temperature).fold(f64::INFINITY, f64::min);
    let max = trend.iter().map(|p| p.temperature).fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;

    trend
        .iter()
        .map(|p| {
            // 最低気温でも1目盛りは表示
            let fraction = if span > 0.0 {
                (p.temperature - min) / span
            } else {
                1.0
            };
            let filled = 1 + (fraction * (BAR_WIDTH - 1) as f64).round() as usize;
            format!("{} {:<width$} {:.1}°C", p.time, "▇".repeat(filled), p.temperature, width = BAR_WIDTH)
        })
        .collect()
}

/// 圃場レイアウト（4×4、区画番号と状態記号）
pub fn field_grid(plots: &[PlotStatus; PLOT_COUNT]) -> Vec<String> {
    plots
        .chunks(PLOTS_PER_ROW)
        .enumerate()
        .map(|(row, chunk)| {
            chunk
                .iter()
                .enumerate()
                .map(|(col, status)| {
                    let symbol = match status {
                        PlotStatus::Healthy => "🟩",
                        PlotStatus::Diseased => "🟥",
                        PlotStatus::Unknown => "⬜",
                    };
                    format!("{:>2}{}", row * PLOTS_PER_ROW + col + 1, symbol)
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// 先頭だけ大文字（例: "clear sky" → "Clear sky"）
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_chart_labels() {
        let tally = HealthTally { healthy: 1, diseased: 2 };
        let lines = health_chart(&tally);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Healthy"));
        assert!(lines[0].contains("33.3%"));
        assert!(lines[1].contains("66.7%"));
        assert!(lines[1].ends_with("(2)"));
    }

    #[test]
    fn test_health_chart_empty() {
        let lines = health_chart(&HealthTally::default());
        assert!(lines.iter().all(|l| l.contains("0.0%")));
    }

    #[test]
    fn test_trend_chart_scales() {
        let trend = vec![
            TrendPoint { time: "06:00".into(), temperature: 20.0 },
            TrendPoint { time: "12:00".into(), temperature: 30.0 },
        ];
        let lines = trend_chart(&trend);
        assert!(lines[0].starts_with("06:00 ▇ "));
        assert!(lines[1].contains(&"▇".repeat(BAR_WIDTH)));
        assert!(lines[1].ends_with("30.0°C"));
    }

    #[test]
    fn test_field_grid_rows() {
        let mut plots = [PlotStatus::Unknown; PLOT_COUNT];
        plots[0] = PlotStatus::Diseased;
        plots[5] = PlotStatus::Healthy;

        let lines = field_grid(&plots);
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], " 1🟥  2⬜  3⬜  4⬜");
        assert_eq!(lines[1], " 5⬜  6🟩  7⬜  8⬜");
        assert!(lines[3].ends_with("16⬜"));
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("light RAIN"), "Light rain");
        assert_eq!(capitalize(""), "");
    }
}
