//! エラー型定義

use thiserror::Error;

/// 共通ライブラリのエラー（純粋ロジックなのでI/O系はない）
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("No market prices for crop: {0}")]
    UnknownCrop(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_unknown_crop() {
        let error = Error::UnknownCrop("Maize".to_string());
        assert_eq!(format!("{}", error), "No market prices for crop: Maize");
    }
}
