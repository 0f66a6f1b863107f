use crate::analyzer::{Classification, FixedClassifier, HealthClassifier, RandomClassifier};
use clap::ValueEnum;

/// 健康判定の方式
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum ClassifierKind {
    /// 健全/罹病をランダムに返す（デモ）
    #[default]
    Random,
    /// 常に健全
    Healthy,
    /// 常に罹病（Early Blight）
    Diseased,
}

impl ClassifierKind {
    pub fn build(&self) -> Box<dyn HealthClassifier> {
        match self {
            ClassifierKind::Random => Box::new(RandomClassifier::new()),
            ClassifierKind::Healthy => Box::new(FixedClassifier::new(Classification::healthy())),
            ClassifierKind::Diseased => Box::new(FixedClassifier::new(Classification::early_blight())),
        }
    }
}
