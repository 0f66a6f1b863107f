mod classifier;

pub use classifier::{Classification, FixedClassifier, HealthClassifier, RandomClassifier};

use crate::error::{FarmVisionError, Result};
use crate::scanner::CropImage;
use crate::session::SessionState;
use chrono::Utc;
use farm_vision_common::health::NO_DISEASE;
use farm_vision_common::{advisory_for, CropAnalysisResult, HealthStatus};
use tracing::info;

/// 画像1枚を診断して履歴に追加
///
/// 登録済みの農家が必要（未登録なら `NotRegistered`）。
/// 健全なら病名は "None"、アドバイスは病名から引く。
/// 罹病なのに病名がない判定は `Classifier` エラーとし、履歴には残さない。
pub fn analyze(
    session: &mut SessionState,
    image: &CropImage,
    classifier: &dyn HealthClassifier,
) -> Result<CropAnalysisResult> {
    if !session.is_registered() {
        return Err(FarmVisionError::NotRegistered);
    }

    let verdict = classifier.classify(image)?;
    let disease = match verdict.status {
        HealthStatus::Healthy => NO_DISEASE.to_string(),
        HealthStatus::Diseased => {
            let label = verdict.disease_label.trim();
            if label.is_empty() || label.eq_ignore_ascii_case(NO_DISEASE) {
                return Err(FarmVisionError::Classifier(format!(
                    "{} reported a diseased crop without naming the disease",
                    classifier.name()
                )));
            }
            label.to_string()
        }
    };

    let result = CropAnalysisResult {
        file_name: image.file_name.clone(),
        status: verdict.status,
        advisory: advisory_for(&disease).to_string(),
        disease,
        confidence: verdict.confidence.min(100),
        analyzed_at: Utc::now(),
    };

    info!(
        file = %result.file_name,
        status = %result.status,
        disease = %result.disease,
        classifier = classifier.name(),
        "Crop analysed"
    );

    session.record(result.clone());
    Ok(result)
}

/// 複数枚をまとめて診断（順序を保持）
pub fn analyze_all(
    session: &mut SessionState,
    images: &[CropImage],
    classifier: &dyn HealthClassifier,
) -> Result<Vec<CropAnalysisResult>> {
    images
        .iter()
        .map(|image| analyze(session, image, classifier))
        .collect()
}
