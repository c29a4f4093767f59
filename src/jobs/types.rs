//! Results returned by the jobs

use crate::models::OrderReceipt;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Outcome of a pre-market report run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportArtifact {
    pub markdown_path: PathBuf,
    pub symbols: usize,
    pub decided: usize,
}

/// Outcome of an intraday trading run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IntradaySummary {
    /// Orders accepted by the broker
    pub dispatched: usize,
    /// HOLD or unrecognised decisions
    pub skipped: usize,
    /// Symbols for which no decision came back
    pub undecided: usize,
    /// Orders the broker rejected
    pub failed: usize,
    pub orders: Vec<OrderReceipt>,
}
