//! 作物の健康集計とアドバイス
//!
//! 診断履歴から健全/罹病の件数と割合（小数点1桁）を算出する。

use crate::types::{CropAnalysisResult, HealthStatus};
use serde::Serialize;

/// 健全時の病名ラベル
pub const NO_DISEASE: &str = "None";

/// 病名 → 対処アドバイス
const ADVISORIES: &[(&str, &str)] = &[
    (NO_DISEASE, "No action required"),
    ("Early Blight", "Spray organic fungicide"),
    ("Late Blight", "Remove infected leaves and apply a copper-based fungicide"),
    ("Leaf Curl", "Control whitefly with neem oil spray"),
    ("Powdery Mildew", "Apply wettable sulphur in the early morning"),
];

const FALLBACK_ADVISORY: &str = "Consult your local agricultural extension officer";

/// 病名に対応するアドバイスを取得（大文字小文字は無視）
pub fn advisory_for(disease: &str) -> &'static str {
    ADVISORIES
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(disease.trim()))
        .map(|(_, advice)| *advice)
        .unwrap_or(FALLBACK_ADVISORY)
}

/// 健全/罹病の集計
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct HealthTally {
    pub healthy: usize,
    pub diseased: usize,
}

impl HealthTally {
    pub fn from_history(history: &[CropAnalysisResult]) -> Self {
        let healthy = history
            .iter()
            .filter(|r| r.status == HealthStatus::Healthy)
            .count();
        Self {
            healthy,
            diseased: history.len() - healthy,
        }
    }

    pub fn total(&self) -> usize {
        self.healthy + self.diseased
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    pub fn healthy_percent(&self) -> f64 {
        percent(self.healthy, self.total())
    }

    pub fn diseased_percent(&self) -> f64 {
        percent(self.diseased, self.total())
    }

    /// 円グラフ用ラベル（例: "66.7%"）
    pub fn format_percent(value: f64) -> String {
        format!("{:.1}%", value)
    }
}

fn percent(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    count as f64 / total as f64 * 100.0
}
