//! Farm Vision
//!
//! 農家登録・作物の健康診断・マンディ価格・天気アドバイスを1セッションで扱う。
//! 表示面は `router::Pages` を実装すれば差し替えられる（既定は端末の `ui::ConsoleUi`）。

pub mod analyzer;
pub mod classifier_kind;
pub mod cli;
pub mod config;
pub mod error;
pub mod registry;
pub mod router;
pub mod scanner;
pub mod session;
pub mod ui;
pub mod weather;

pub use farm_vision_common as common;
