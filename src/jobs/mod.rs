//! Pre-market report and intraday trading jobs

pub mod context;
pub mod handlers;
pub mod types;

pub use context::JobContext;
pub use handlers::{intraday_trading, premarket_report};
pub use types::{IntradaySummary, ReportArtifact};
