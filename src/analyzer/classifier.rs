//! 作物の健康判定
//!
//! `HealthClassifier` を差し替えれば実際の画像分類モデルを組み込める。
//! 既定の `RandomClassifier` はデモ用で、健全/罹病を等確率で返す。

use crate::error::{FarmVisionError, Result};
use crate::scanner::CropImage;
use farm_vision_common::health::NO_DISEASE;
use farm_vision_common::HealthStatus;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

/// 分類器の出力
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub status: HealthStatus,
    pub disease_label: String,
    /// 確信度（%）
    pub confidence: u8,
}

impl Classification {
    pub fn healthy() -> Self {
        Self {
            status: HealthStatus::Healthy,
            disease_label: NO_DISEASE.to_string(),
            confidence: 95,
        }
    }

    pub fn early_blight() -> Self {
        Self {
            status: HealthStatus::Diseased,
            disease_label: "Early Blight".to_string(),
            confidence: 91,
        }
    }
}

pub trait HealthClassifier: Send + Sync {
    fn name(&self) -> &str;

    fn classify(&self, image: &CropImage) -> Result<Classification>;
}

/// デモ用ランダム分類器
pub struct RandomClassifier {
    rng: Mutex<StdRng>,
}

impl RandomClassifier {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// 再現可能な系列（テスト用）
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for RandomClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl HealthClassifier for RandomClassifier {
    fn name(&self) -> &str {
        "random"
    }

    fn classify(&self, _image: &CropImage) -> Result<Classification> {
        let healthy = self
            .rng
            .lock()
            .map_err(|_| FarmVisionError::Classifier("乱数生成器がロックできません".into()))?
            .gen_bool(0.5);

        Ok(if healthy {
            Classification::healthy()
        } else {
            Classification::early_blight()
        })
    }
}

/// 常に同じ判定を返す分類器
pub struct FixedClassifier {
    verdict: Classification,
}

impl FixedClassifier {
    pub fn new(verdict: Classification) -> Self {
        Self { verdict }
    }
}

impl HealthClassifier for FixedClassifier {
    fn name(&self) -> &str {
        match self.verdict.status {
            HealthStatus::Healthy => "always-healthy",
            HealthStatus::Diseased => "always-diseased",
        }
    }

    fn classify(&self, _image: &CropImage) -> Result<Classification> {
        Ok(self.verdict.clone())
    }
}
