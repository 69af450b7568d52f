//! Marketplace price blocks (TCGplayer, Cardmarket)
//!
//! Every numeric price defaults to [`NO_PRICE`] when absent.

use super::record::RecordExt;
use crate::types::Record;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Sentinel for a missing price
pub const NO_PRICE: f64 = -1.0;

// ============================================================================
// TCGplayer
// ============================================================================

/// Which TCGplayer price to read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PriceKind {
    Low,
    Mid,
    High,
    Market,
    DirectLow,
}

/// Prices for one print variant (USD)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TcgPlayerPrices {
    pub low: f64,
    pub mid: f64,
    pub high: f64,
    pub market: f64,
    pub direct_low: f64,
}

impl Default for TcgPlayerPrices {
    fn default() -> Self {
        Self {
            low: NO_PRICE,
            mid: NO_PRICE,
            high: NO_PRICE,
            market: NO_PRICE,
            direct_low: NO_PRICE,
        }
    }
}

impl TcgPlayerPrices {
    fn from_record(record: &Record) -> Self {
        Self {
            low: record.f64_or("low", NO_PRICE),
            mid: record.f64_or("mid", NO_PRICE),
            high: record.f64_or("high", NO_PRICE),
            market: record.f64_or("market", NO_PRICE),
            direct_low: record.f64_or("directLow", NO_PRICE),
        }
    }

    /// Read one price
    pub fn get(&self, kind: PriceKind) -> f64 {
        match kind {
            PriceKind::Low => self.low,
            PriceKind::Mid => self.mid,
            PriceKind::High => self.high,
            PriceKind::Market => self.market,
            PriceKind::DirectLow => self.direct_low,
        }
    }

    /// True when no price is known
    pub fn is_empty(&self) -> bool {
        [self.low, self.mid, self.high, self.market, self.direct_low]
            .iter()
            .all(|&p| p == NO_PRICE)
    }
}

/// TCGplayer listing, prices keyed by variant (`normal`, `holofoil`, ...)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TcgPlayer {
    pub url: String,
    pub updated_at: String,
    pub prices: BTreeMap<String, TcgPlayerPrices>,
}

impl TcgPlayer {
    /// Map an optional `tcgplayer` object
    pub fn from_optional(record: Option<&Record>) -> Self {
        let Some(record) = record else {
            return Self::default();
        };
        let prices = record
            .object("prices")
            .map(|variants| {
                variants
                    .iter()
                    .filter_map(|(variant, value)| {
                        value
                            .as_object()
                            .map(|p| (variant.clone(), TcgPlayerPrices::from_record(p)))
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self {
            url: record.str_or_empty("url"),
            updated_at: record.str_or_empty("updatedAt"),
            prices,
        }
    }

    /// Prices for a variant
    pub fn variant(&self, variant: &str) -> Option<&TcgPlayerPrices> {
        self.prices.get(variant)
    }
}

// ============================================================================
// Cardmarket
// ============================================================================

/// Cardmarket price guide (EUR)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardMarketPrices {
    pub average_sell_price: f64,
    pub low_price: f64,
    pub trend_price: f64,
    pub german_pro_low: f64,
    pub suggested_price: f64,
    pub reverse_holo_sell: f64,
    pub reverse_holo_low: f64,
    pub reverse_holo_trend: f64,
    pub low_price_ex_plus: f64,
    pub avg1: f64,
    pub avg7: f64,
    pub avg30: f64,
    pub reverse_holo_avg1: f64,
    pub reverse_holo_avg7: f64,
    pub reverse_holo_avg30: f64,
}

impl Default for CardMarketPrices {
    fn default() -> Self {
        Self::from_record(&Record::new())
    }
}

impl CardMarketPrices {
    fn from_record(r: &Record) -> Self {
        Self {
            average_sell_price: r.f64_or("averageSellPrice", NO_PRICE),
            low_price: r.f64_or("lowPrice", NO_PRICE),
            trend_price: r.f64_or("trendPrice", NO_PRICE),
            german_pro_low: r.f64_or("germanProLow", NO_PRICE),
            suggested_price: r.f64_or("suggestedPrice", NO_PRICE),
            reverse_holo_sell: r.f64_or("reverseHoloSell", NO_PRICE),
            reverse_holo_low: r.f64_or("reverseHoloLow", NO_PRICE),
            reverse_holo_trend: r.f64_or("reverseHoloTrend", NO_PRICE),
            low_price_ex_plus: r.f64_or("lowPriceExPlus", NO_PRICE),
            avg1: r.f64_or("avg1", NO_PRICE),
            avg7: r.f64_or("avg7", NO_PRICE),
            avg30: r.f64_or("avg30", NO_PRICE),
            reverse_holo_avg1: r.f64_or("reverseHoloAvg1", NO_PRICE),
            reverse_holo_avg7: r.f64_or("reverseHoloAvg7", NO_PRICE),
            reverse_holo_avg30: r.f64_or("reverseHoloAvg30", NO_PRICE),
        }
    }

    /// True when no price is known
    pub fn is_empty(&self) -> bool {
        [
            self.average_sell_price,
            self.low_price,
            self.trend_price,
            self.german_pro_low,
            self.suggested_price,
            self.reverse_holo_sell,
            self.reverse_holo_low,
            self.reverse_holo_trend,
            self.low_price_ex_plus,
            self.avg1,
            self.avg7,
            self.avg30,
            self.reverse_holo_avg1,
            self.reverse_holo_avg7,
            self.reverse_holo_avg30,
        ]
        .iter()
        .all(|&p| p == NO_PRICE)
    }
}

/// Cardmarket listing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardMarket {
    pub url: String,
    pub updated_at: String,
    pub prices: CardMarketPrices,
}

impl CardMarket {
    /// Map an optional `cardmarket` object
    pub fn from_optional(record: Option<&Record>) -> Self {
        record.map_or_else(Self::default, |r| Self {
            url: r.str_or_empty("url"),
            updated_at: r.str_or_empty("updatedAt"),
            prices: r
                .object("prices")
                .map(CardMarketPrices::from_record)
                .unwrap_or_default(),
        })
    }
}
