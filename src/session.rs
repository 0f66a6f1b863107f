//! セッション状態
//!
//! 1回の対話セッションにつき1つ。呼び出し側が所有し、各アクションに `&mut` で渡す。
//! - farmer: 未登録 → 登録済みへ一度だけ遷移
//! - history: 追記のみ、順序保持

use crate::router::Page;
use farm_vision_common::{CropAnalysisResult, FarmerProfile, HealthTally};

#[derive(Debug, Clone, Default)]
pub struct SessionState {
    farmer: Option<FarmerProfile>,
    history: Vec<CropAnalysisResult>,
    current_page: Page,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn farmer(&self) -> Option<&FarmerProfile> {
        self.farmer.as_ref()
    }

    pub fn is_registered(&self) -> bool {
        self.farmer.is_some()
    }

    pub fn history(&self) -> &[CropAnalysisResult] {
        &self.history
    }

    pub fn tally(&self) -> HealthTally {
        HealthTally::from_history(&self.history)
    }

    pub fn current_page(&self) -> Page {
        self.current_page
    }

    pub fn navigate(&mut self, page: Page) {
        self.current_page = page;
    }

    /// 未登録の場合のみ保存。保存したらtrue
    pub(crate) fn set_farmer(&mut self, profile: FarmerProfile) -> bool {
        if self.farmer.is_some() {
            return false;
        }
        self.farmer = Some(profile);
        true
    }

    pub(crate) fn record(&mut self, result: CropAnalysisResult) {
        self.history.push(result);
    }
}
