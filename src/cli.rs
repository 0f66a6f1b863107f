use clap::{Parser, Subcommand};
use crate::classifier_kind::ClassifierKind;

#[derive(Parser)]
#[command(name = "farm-vision")]
#[command(about = "農家向け圃場モニタリング・市場価格・天気アドバイスツール", long_about = None)]
pub struct Cli {
    /// 省略時は対話セッションを開始
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 対話セッション（登録・診断・市場価格・天気）
    Session {
        /// 健康判定の方式
        #[arg(long, value_enum, default_value_t = ClassifierKind::Random)]
        classifier: ClassifierKind,
    },

    /// 作物の市場価格と最高値の市場を表示
    Prices {
        /// 作物名 (Tomato/Rice/Cotton)
        #[arg(short, long)]
        crop: String,

        /// 最寄りの市場
        #[arg(short, long)]
        market: Option<String>,
    },

    /// 明日の天気予報と農作業アドバイスを表示
    Weather {
        /// 都市名・地区名（省略時は設定の default_location）
        #[arg(short, long)]
        location: Option<String>,
    },

    /// 設定を表示/編集
    Config {
        /// 天気APIキーを設定
        #[arg(long)]
        set_api_key: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
