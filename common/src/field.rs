//! 圃場レイアウト
//!
//! 4×4の区画に直近の診断結果を割り当てる（区画1が最新）。
//! 結果のない区画は `Unknown`。

use crate::types::{CropAnalysisResult, HealthStatus};
use serde::Serialize;

/// 区画数
pub const PLOT_COUNT: usize = 16;
/// 1行あたりの区画数
pub const PLOTS_PER_ROW: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PlotStatus {
    Healthy,
    Diseased,
    Unknown,
}

/// 区画ごとの状態（新しい診断から順に最大16件）
pub fn field_layout(history: &[CropAnalysisResult]) -> [PlotStatus; PLOT_COUNT] {
    let mut plots = [PlotStatus::Unknown; PLOT_COUNT];
    for (plot, result) in plots.iter_mut().zip(history.iter().rev()) {
        *plot = match result.status {
            HealthStatus::Healthy => PlotStatus::Healthy,
            HealthStatus::Diseased => PlotStatus::Diseased,
        };
    }
    plots
}

/// 区画の説明（例: "Plot 3: Early Blight (91%)"、範囲外は None）
pub fn plot_label(history: &[CropAnalysisResult], index: usize) -> Option<String> {
    if index >= PLOT_COUNT {
        return None;
    }

    let number = index + 1;
    Some(match history.iter().rev().nth(index) {
        Some(result) => {
            let problem = if result.is_healthy() {
                result.status.label()
            } else {
                result.disease.as_str()
            };
            format!("Plot {}: {} ({})", number, problem, result.confidence_label())
        }
        None => format!("Plot {}: No data", number),
    })
}
