//! Indicator provider used by the orchestrator

use crate::indicators::momentum::{calculate_rsi, DEFAULT_RSI_PERIOD};
use crate::indicators::trend::{calculate_ema, DEFAULT_EMA_PERIOD};
use crate::models::indicators::{IndicatorMap, Reading};

/// Computes a named set of indicators from a close-price series
pub trait IndicatorProvider: Send + Sync {
    fn compute(&self, closes: &[f64]) -> IndicatorMap;
}

/// RSI plus an EMA, reported as `"RSI"` and `"EMA_<period>"`
#[derive(Debug, Clone)]
pub struct TechnicalIndicators {
    rsi_period: u32,
    ema_period: u32,
}

impl TechnicalIndicators {
    pub fn new() -> Self {
        Self {
            rsi_period: DEFAULT_RSI_PERIOD,
            ema_period: DEFAULT_EMA_PERIOD,
        }
    }

    pub fn with_periods(rsi_period: u32, ema_period: u32) -> Self {
        Self {
            rsi_period,
            ema_period,
        }
    }

    pub fn ema_key(&self) -> String {
        format!("EMA_{}", self.ema_period)
    }
}

impl Default for TechnicalIndicators {
    fn default() -> Self {
        Self::new()
    }
}

impl IndicatorProvider for TechnicalIndicators {
    fn compute(&self, closes: &[f64]) -> IndicatorMap {
        let mut indicators = IndicatorMap::new();
        indicators.insert(
            "RSI".to_string(),
            Reading::from(calculate_rsi(closes, self.rsi_period).map(|r| r.value)),
        );
        indicators.insert(
            self.ema_key(),
            Reading::from(calculate_ema(closes, self.ema_period).map(|e| e.value)),
        );
        indicators
    }
}
