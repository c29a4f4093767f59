//! EMA (Exponential Moving Average) indicator

use crate::models::indicators::EmaIndicator;

pub const DEFAULT_EMA_PERIOD: u32 = 20;

/// Calculate EMA for a specific period, seeded with the SMA of the first
/// `period` closes
pub fn calculate_ema(closes: &[f64], period: u32) -> Option<EmaIndicator> {
    let n = period as usize;
    if n == 0 || closes.len() < n {
        return None;
    }

    let k = 2.0 / (n as f64 + 1.0);
    let seed = closes[..n].iter().sum::<f64>() / n as f64;
    let value = closes[n..]
        .iter()
        .fold(seed, |ema, close| close * k + ema * (1.0 - k));

    Some(EmaIndicator { value, period })
}
