//! Markdown report rendering and persistence.

pub mod markdown;
pub mod render;

pub use markdown::{daily_report, symbol_section, NO_DECISION_MARKER, REPORT_TITLE};
pub use render::ReportRenderer;
