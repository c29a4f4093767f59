use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Coarse snapshot of the market, built once per run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketOverview {
    pub date: String,
    pub trend: String,
}

impl MarketOverview {
    pub fn new(date: impl Into<String>, trend: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            trend: trend.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub quantity: i64,
    #[serde(rename = "avg_price", alias = "average_price")]
    pub average_price: f64,
}

/// Holdings plus cash, as reported by the broker. Read-only to the pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PositionSet {
    pub cash: f64,
    #[serde(default)]
    pub holdings: BTreeMap<String, Position>,
}

impl PositionSet {
    pub fn with_cash(cash: f64) -> Self {
        Self {
            cash,
            holdings: BTreeMap::new(),
        }
    }

    pub fn with_holding(mut self, symbol: impl Into<String>, quantity: i64, average_price: f64) -> Self {
        self.holdings.insert(
            symbol.into(),
            Position {
                quantity,
                average_price,
            },
        );
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountInfo {
    pub cash: f64,
    pub equity: f64,
    pub currency: String,
}

/// Close prices for one symbol, oldest first
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    pub symbol: String,
    pub closes: Vec<f64>,
}

impl PriceSeries {
    pub fn new(symbol: impl Into<String>, closes: Vec<f64>) -> Self {
        Self {
            symbol: symbol.into(),
            closes,
        }
    }

    pub fn empty(symbol: impl Into<String>) -> Self {
        Self::new(symbol, Vec::new())
    }

    pub fn latest(&self) -> Option<f64> {
        self.closes.last().copied()
    }
}
