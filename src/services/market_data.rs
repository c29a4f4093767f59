//! Market data provider interface and the placeholder generator used until a
//! real feed is wired in.

use crate::models::PriceSeries;
use rand::Rng;

pub trait MarketDataProvider: Send + Sync {
    /// Historical closes for a symbol, oldest first
    fn get_prices(&self, symbol: &str) -> Result<PriceSeries, Box<dyn std::error::Error + Send + Sync>>;
}

/// Uniformly random closes, rounded to cents
#[derive(Debug, Clone)]
pub struct DummyMarketDataProvider {
    points: usize,
    low: f64,
    high: f64,
}

impl DummyMarketDataProvider {
    pub fn new() -> Self {
        Self {
            points: 20,
            low: 100.0,
            high: 200.0,
        }
    }

    pub fn with_range(points: usize, low: f64, high: f64) -> Self {
        Self { points, low, high }
    }
}

impl Default for DummyMarketDataProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MarketDataProvider for DummyMarketDataProvider {
    fn get_prices(&self, symbol: &str) -> Result<PriceSeries, Box<dyn std::error::Error + Send + Sync>> {
        if !(self.low < self.high) {
            return Err(format!("invalid price range {}..{}", self.low, self.high).into());
        }

        let mut rng = rand::thread_rng();
        let closes = (0..self.points)
            .map(|_| (rng.gen_range(self.low..self.high) * 100.0).round() / 100.0)
            .collect();

        Ok(PriceSeries::new(symbol, closes))
    }
}
