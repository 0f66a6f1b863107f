//! マンディ（卸売市場）価格表
//!
//! 作物 → 市場 → 価格（₹/quintal）の静的な表。順序付きなので同額の場合は先頭の市場を返す。

use crate::error::{Error, Result};
use crate::types::Crop;
use serde::Serialize;

/// 市場ごとの価格
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarketPrice {
    pub market: String,
    pub price: u32,
}

impl MarketPrice {
    pub fn new(market: impl Into<String>, price: u32) -> Self {
        Self {
            market: market.into(),
            price,
        }
    }
}

const MANDI_PRICES: &[(Crop, &[(&str, u32)])] = &[
    (Crop::Tomato, &[("Hyderabad", 1200), ("Vijayawada", 1100), ("Warangal", 1250)]),
    (Crop::Rice, &[("Hyderabad", 1800), ("Karimnagar", 1750), ("Nizamabad", 1850)]),
    (Crop::Cotton, &[("Warangal", 6500), ("Nalgonda", 6400), ("Khammam", 6550)]),
];

/// 価格表
#[derive(Debug, Clone)]
pub struct MarketPriceTable {
    rows: Vec<(Crop, Vec<MarketPrice>)>,
}

impl MarketPriceTable {
    /// 任意の表を作成（市場のない作物は除外）
    pub fn new(rows: Vec<(Crop, Vec<MarketPrice>)>) -> Self {
        Self {
            rows: rows.into_iter().filter(|(_, prices)| !prices.is_empty()).collect(),
        }
    }

    /// 組み込みのマンディ価格表
    pub fn standard() -> Self {
        Self::new(
            MANDI_PRICES
                .iter()
                .map(|(crop, prices)| {
                    let prices = prices.iter().map(|&(m, p)| MarketPrice::new(m, p)).collect();
                    (*crop, prices)
                })
                .collect(),
        )
    }

    /// 価格のある作物一覧（表の順）
    pub fn crops(&self) -> Vec<Crop> {
        self.rows.iter().map(|(crop, _)| *crop).collect()
    }

    pub fn prices_for(&self, crop: Crop) -> Result<&[MarketPrice]> {
        self.rows
            .iter()
            .find(|(c, _)| *c == crop)
            .map(|(_, prices)| prices.as_slice())
            .ok_or_else(|| Error::UnknownCrop(crop.to_string()))
    }

    /// 最高値の市場
    pub fn best_market(&self, crop: Crop) -> Result<&MarketPrice> {
        let mut best: Option<&MarketPrice> = None;
        for entry in self.prices_for(crop)? {
            if best.map_or(true, |b| entry.price > b.price) {
                best = Some(entry);
            }
        }
        best.ok_or_else(|| Error::UnknownCrop(crop.to_string()))
    }
}

impl Default for MarketPriceTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_best_market_tomato() {
        let table = MarketPriceTable::standard();
        let best = table.best_market(Crop::Tomato).unwrap();
        assert_eq!(best.market, "Warangal");
        assert_eq!(best.price, 1250);
    }

    #[test]
    fn test_best_market_rice_and_cotton() {
        let table = MarketPriceTable::standard();
        assert_eq!(table.best_market(Crop::Rice).unwrap().market, "Nizamabad");
        assert_eq!(table.best_market(Crop::Cotton).unwrap().market, "Khammam");
    }

    #[test]
    fn test_best_market_tie_keeps_first() {
        let table = MarketPriceTable::new(vec![(
            Crop::Maize,
            vec![
                MarketPrice::new("Adilabad", 2100),
                MarketPrice::new("Siddipet", 2100),
                MarketPrice::new("Medak", 2000),
            ],
        )]);
        assert_eq!(table.best_market(Crop::Maize).unwrap().market, "Adilabad");
    }

    #[test]
    fn test_prices_for_preserves_order() {
        let table = MarketPriceTable::standard();
        let markets: Vec<&str> = table
            .prices_for(Crop::Rice)
            .unwrap()
            .iter()
            .map(|p| p.market.as_str())
            .collect();
        assert_eq!(markets, vec!["Hyderabad", "Karimnagar", "Nizamabad"]);
    }

    #[test]
    fn test_unknown_crop() {
        let table = MarketPriceTable::standard();
        assert!(matches!(table.prices_for(Crop::Wheat), Err(Error::UnknownCrop(_))));
        assert!(matches!(table.best_market(Crop::Maize), Err(Error::UnknownCrop(_))));
    }

    #[test]
    fn test_crops_listing() {
        let table = MarketPriceTable::new(vec![
            (Crop::Rice, vec![MarketPrice::new("Hyderabad", 1800)]),
            (Crop::Wheat, vec![]),
        ]);
        assert_eq!(table.crops(), vec![Crop::Rice]);
        assert_eq!(MarketPriceTable::standard().crops(), vec![Crop::Tomato, Crop::Rice, Crop::Cotton]);
    }
}
