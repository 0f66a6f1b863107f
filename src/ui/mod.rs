//! 端末表示
//!
//! 対話セッション（`ConsoleUi`）と、サブコマンドでも使う表示関数。

pub mod chart;
mod console;

pub use console::ConsoleUi;

use crate::error::Result;
use farm_vision_common::{
    field_layout, plot_label, Crop, CropAnalysisResult, FarmingTip, HealthTally, MarketPriceTable,
    WeatherSummary,
};

/// 価格表と最高値の市場を表示
pub fn print_prices(table: &MarketPriceTable, crop: Crop, nearest: Option<&str>) -> Result<()> {
    let prices = table.prices_for(crop)?;
    let best = table.best_market(crop)?;

    println!("💰 Prices for {}", crop);
    for entry in prices {
        let marker = if nearest == Some(entry.market.as_str()) { "📍" } else { "  " };
        println!("  {} {:<12} ₹{}/qtl", marker, entry.market, entry.price);
    }
    println!("🌟 Best price is at {} → ₹{}/qtl", best.market, best.price);

    if let Some(near) = prices.iter().find(|p| nearest == Some(p.market.as_str())) {
        if near.market != best.market {
            println!(
                "   ₹{}/qtl more than your nearest market ({})",
                best.price - near.price,
                near.market
            );
        }
    }
    Ok(())
}

/// 明日の天気まとめを表示
pub fn print_weather_summary(location: &str, summary: &WeatherSummary) {
    println!("📅 Forecast for {}", summary.date);
    println!("🌡 Min Temp: {:.1}°C", summary.min_temp);
    println!("🔥 Max Temp: {:.1}°C", summary.max_temp);
    println!("☁ Weather: {}", chart::capitalize(&summary.dominant_condition));

    match summary.tip {
        Some(tip @ FarmingTip::ReduceIrrigation) => println!("💡 {}", tip.message()),
        Some(tip @ FarmingTip::HeatStress) => println!("🔥 {}", tip.message()),
        Some(tip @ FarmingTip::ColdProtection) => println!("❄ {}", tip.message()),
        None => {}
    }

    println!("\nTomorrow's Temperature Trend for {}", chart::capitalize(location));
    for line in chart::trend_chart(&summary.trend) {
        println!("  {}", line);
    }
}

/// 1件の診断結果を表示
pub fn print_analysis(result: &CropAnalysisResult) {
    if result.is_healthy() {
        println!("✅ Crop is Healthy ({})", result.confidence_label());
    } else {
        println!("🛑 Detected: {} ({})", result.disease, result.confidence_label());
        println!("💡 Advisory: {}", result.advisory);
    }
}

/// 診断履歴と健全/罹病の割合を表示
pub fn print_health_summary(history: &[CropAnalysisResult]) {
    println!("\n📊 Crop Health Summary");

    if history.is_empty() {
        println!("No crop analysis history yet. Upload an image to see summary.");
        return;
    }

    println!("🖼 Uploaded Images & Results");
    for entry in history {
        println!(
            "  {} {} → {} ({})",
            entry.analyzed_at.format("%H:%M:%S"),
            entry.file_name,
            entry.status,
            entry.disease
        );
    }

    println!();
    for line in chart::health_chart(&HealthTally::from_history(history)) {
        println!("  {}", line);
    }

    println!("\n🗺 Field Layout (plot 1 = latest)");
    for line in chart::field_grid(&field_layout(history)) {
        println!("  {}", line);
    }
    for label in (0..history.len()).map_while(|i| plot_label(history, i)) {
        println!("  {}", label);
    }
}
