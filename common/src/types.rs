//! 農家・診断結果の型定義
//!
//! CLIと他の表示面で共有される型:
//! - Crop: 登録・市場価格で選べる作物
//! - FarmerProfile: 登録済み農家プロフィール（セッションにつき1件）
//! - CropAnalysisResult: 作物診断1回分の記録

use crate::error::Error;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 主要作物
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Crop {
    Tomato,
    Rice,
    Cotton,
    Maize,
    Wheat,
}

impl Crop {
    /// 登録フォームの選択肢（表示順）
    pub const ALL: [Crop; 5] = [Crop::Tomato, Crop::Rice, Crop::Cotton, Crop::Maize, Crop::Wheat];

    pub fn name(&self) -> &'static str {
        match self {
            Crop::Tomato => "Tomato",
            Crop::Rice => "Rice",
            Crop::Cotton => "Cotton",
            Crop::Maize => "Maize",
            Crop::Wheat => "Wheat",
        }
    }
}

impl fmt::Display for Crop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Crop {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Crop::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownCrop(s.to_string()))
    }
}

/// 農家プロフィール
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FarmerProfile {
    pub name: String,
    pub phone: String,
    pub state: String,
    pub district: String,
    pub village: String,
    pub primary_crop: Crop,
}

/// 診断ステータス（二値）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthStatus {
    Healthy,
    Diseased,
}

impl HealthStatus {
    pub fn label(&self) -> &'static str {
        match self {
            HealthStatus::Healthy => "Healthy",
            HealthStatus::Diseased => "Diseased",
        }
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 作物診断結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CropAnalysisResult {
    pub file_name: String,
    pub status: HealthStatus,
    /// 病名（健全なら "None"）
    pub disease: String,
    /// 確信度（%）
    pub confidence: u8,
    pub advisory: String,
    pub analyzed_at: DateTime<Utc>,
}

impl CropAnalysisResult {
    /// 表示用の確信度ラベル（例: "91%"）
    pub fn confidence_label(&self) -> String {
        format!("{}%", self.confidence)
    }

    pub fn is_healthy(&self) -> bool {
        self.status == HealthStatus::Healthy
    }
}
