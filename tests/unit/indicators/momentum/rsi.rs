//! Unit tests for RSI indicator

use autotrader::indicators::momentum::{calculate_rsi, DEFAULT_RSI_PERIOD};

fn rising(count: usize, base: f64) -> Vec<f64> {
    (0..count).map(|i| base + i as f64).collect()
}

#[test]
fn test_rsi_insufficient_data() {
    // 14 changes need 15 closes
    assert!(calculate_rsi(&rising(14, 100.0), 14).is_none());
    assert!(calculate_rsi(&rising(15, 100.0), 14).is_some());
}

#[test]
fn test_rsi_only_gains_is_100() {
    let rsi = calculate_rsi(&rising(20, 100.0), DEFAULT_RSI_PERIOD).unwrap();
    assert_eq!(rsi.value, 100.0);
    assert_eq!(rsi.period, Some(14));
}

#[test]
fn test_rsi_only_losses_is_0() {
    let closes: Vec<f64> = rising(20, 100.0).into_iter().rev().collect();
    let rsi = calculate_rsi(&closes, DEFAULT_RSI_PERIOD).unwrap();
    assert!(rsi.value.abs() < 1e-9);
}

#[test]
fn test_rsi_balanced_moves_is_50() {
    let closes: Vec<f64> = (0..21)
        .map(|i| if i % 2 == 0 { 100.0 } else { 101.0 })
        .collect();
    let rsi = calculate_rsi(&closes, 4).unwrap();
    assert!((rsi.value - 50.0).abs() < 1e-9);
}

#[test]
fn test_rsi_uses_most_recent_window() {
    // Falling first, then rising for the whole window
    let mut closes: Vec<f64> = (0..10).map(|i| 200.0 - i as f64 * 5.0).collect();
    closes.extend((1..=5).map(|i| 155.0 + i as f64));
    let rsi = calculate_rsi(&closes, 5).unwrap();
    assert_eq!(rsi.value, 100.0);
}

#[test]
fn test_rsi_stays_in_range() {
    let closes = vec![
        101.2, 99.8, 102.5, 103.1, 100.4, 98.7, 104.9, 105.5, 103.3, 107.8, 106.1, 109.4, 108.0,
        110.2, 107.7, 111.9, 112.4, 109.9, 113.6, 114.1,
    ];
    let rsi = calculate_rsi(&closes, DEFAULT_RSI_PERIOD).unwrap();
    assert!(rsi.value > 0.0 && rsi.value < 100.0);
}
