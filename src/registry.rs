//! 農家登録
//!
//! セッションにつき1件のみ。登録後の変更・削除はできない。

use crate::error::{FarmVisionError, Result};
use crate::session::SessionState;
use farm_vision_common::{Crop, FarmerProfile};
use tracing::info;

/// 登録フォームの入力値
#[derive(Debug, Clone)]
pub struct RegistrationForm {
    pub name: String,
    pub phone: String,
    pub state: String,
    pub district: String,
    pub village: String,
    pub primary_crop: Crop,
}

/// 氏名・州・郡・村の最小文字数
pub const MIN_TEXT_LEN: usize = 2;
/// 電話番号の最小桁数
pub const MIN_PHONE_DIGITS: usize = 10;

impl RegistrationForm {
    /// 入力チェック（前後の空白を除いて判定）
    ///
    /// 空欄は `ValidationUnavailable`、2文字未満は `FieldTooShort`、
    /// 電話番号が数字10桁以上でなければ `InvalidPhone`。
    pub fn validate(&self) -> Result<FarmerProfile> {
        let fields = [
            ("name", self.name.trim()),
            ("phone", self.phone.trim()),
            ("state", self.state.trim()),
            ("district", self.district.trim()),
            ("village", self.village.trim()),
        ];
        if let Some((field, _)) = fields.iter().find(|(_, value)| value.is_empty()) {
            return Err(FarmVisionError::ValidationUnavailable(*field));
        }

        for (field, value) in fields {
            if field != "phone" && value.chars().count() < MIN_TEXT_LEN {
                return Err(FarmVisionError::FieldTooShort {
                    field,
                    min: MIN_TEXT_LEN,
                });
            }
        }

        let phone = self.phone.trim();
        if phone.len() < MIN_PHONE_DIGITS || !phone.chars().all(|c| c.is_ascii_digit()) {
            return Err(FarmVisionError::InvalidPhone(MIN_PHONE_DIGITS));
        }

        Ok(FarmerProfile {
            name: self.name.trim().to_string(),
            phone: phone.to_string(),
            state: self.state.trim().to_string(),
            district: self.district.trim().to_string(),
            village: self.village.trim().to_string(),
            primary_crop: self.primary_crop,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterOutcome {
    Registered,
    /// 登録済みのため何もしなかった
    AlreadyRegistered,
}

/// 農家を登録。登録済みなら何もしない
pub fn register(session: &mut SessionState, form: &RegistrationForm) -> Result<RegisterOutcome> {
    if session.is_registered() {
        return Ok(RegisterOutcome::AlreadyRegistered);
    }

    let profile = form.validate()?;
    info!(district = %profile.district, crop = %profile.primary_crop, "Farmer registered");
    session.set_farmer(profile);
    Ok(RegisterOutcome::Registered)
}
