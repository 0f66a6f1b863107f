//! ページルーター
//!
//! ページは閉じた列挙型で、描画面（`Pages`）への振り分けは網羅的なmatchで行う。
//! ナビゲーションは `current_page` を更新して描画パスを終了し、次のループで全体を再描画する。

use crate::error::{FarmVisionError, Result};
use crate::session::SessionState;
use async_trait::async_trait;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    Registration,
    Monitoring,
    Prices,
    WeatherReport,
}

/// 描画するビューの種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shell {
    /// ランディングページ
    Landing,
    /// ナビゲーションバー付きのメイン画面
    Main,
}

impl Page {
    /// メイン画面のナビゲーションバー（表示順）
    pub const NAVIGATION: [Page; 4] = [
        Page::Registration,
        Page::Monitoring,
        Page::Prices,
        Page::WeatherReport,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Registration => "registration",
            Page::Monitoring => "monitoring",
            Page::Prices => "prices",
            Page::WeatherReport => "weather_report",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "🌱 Home",
            Page::Registration => "👨‍🌾 Registration",
            Page::Monitoring => "📷 Monitoring",
            Page::Prices => "📈 Prices",
            Page::WeatherReport => "☁️ Weather Report",
        }
    }

    pub fn shell(&self) -> Shell {
        match self {
            Page::Home => Shell::Landing,
            _ => Shell::Main,
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Page {
    type Err = FarmVisionError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "home" => Ok(Page::Home),
            "registration" => Ok(Page::Registration),
            "monitoring" => Ok(Page::Monitoring),
            "prices" => Ok(Page::Prices),
            "weather_report" => Ok(Page::WeatherReport),
            _ => Err(FarmVisionError::InvalidPage(s.to_string())),
        }
    }
}

/// 描画パス終了後の遷移
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// 同じページを再描画
    Stay,
    GoTo(Page),
    Quit,
}

/// 描画面。ページごとに1メソッド
#[async_trait]
pub trait Pages: Send {
    /// メイン画面のヘッダー（タイトルとナビゲーションバー）
    fn shell_header(&mut self, _current: Page) {}

    async fn home(&mut self, session: &mut SessionState) -> Result<Navigation>;
    async fn registration(&mut self, session: &mut SessionState) -> Result<Navigation>;
    async fn monitoring(&mut self, session: &mut SessionState) -> Result<Navigation>;
    async fn prices(&mut self, session: &mut SessionState) -> Result<Navigation>;
    async fn weather_report(&mut self, session: &mut SessionState) -> Result<Navigation>;

    /// 復帰可能なエラーの表示
    fn report_error(&mut self, error: &FarmVisionError);
}

/// 現在のページを1回描画する
pub async fn dispatch<P>(session: &mut SessionState, pages: &mut P) -> Result<Navigation>
where
    P: Pages + ?Sized,
{
    let page = session.current_page();
    debug!(page = %page, "Rendering page");

    if page.shell() == Shell::Main {
        pages.shell_header(page);
    }

    match page {
        Page::Home => pages.home(session).await,
        Page::Registration => pages.registration(session).await,
        Page::Monitoring => pages.monitoring(session).await,
        Page::Prices => pages.prices(session).await,
        Page::WeatherReport => pages.weather_report(session).await,
    }
}

/// Quitまで描画ループを回す。復帰可能なエラーは表示して同じページを再描画
pub async fn run<P>(session: &mut SessionState, pages: &mut P) -> Result<()>
where
    P: Pages + ?Sized,
{
    loop {
        let navigation = match dispatch(session, pages).await {
            Ok(nav) => nav,
            Err(e) if e.is_recoverable() => {
                pages.report_error(&e);
                Navigation::Stay
            }
            Err(e) => return Err(e),
        };

        match navigation {
            Navigation::Stay => {}
            Navigation::GoTo(page) => {
                debug!(from = %session.current_page(), to = %page, "Navigating");
                session.navigate(page);
            }
            Navigation::Quit => return Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_ids_round_trip() {
        for page in [Page::Home, Page::Registration, Page::Monitoring, Page::Prices, Page::WeatherReport] {
            assert_eq!(page.id().parse::<Page>().unwrap(), page);
        }
    }

    #[test]
    fn test_unknown_page_id() {
        let err = "settings".parse::<Page>().unwrap_err();
        assert!(matches!(err, FarmVisionError::InvalidPage(_)));
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_shells() {
        assert_eq!(Page::Home.shell(), Shell::Landing);
        assert!(Page::NAVIGATION.iter().all(|p| p.shell() == Shell::Main));
        assert!(!Page::NAVIGATION.contains(&Page::Home));
    }
}
