//! Technical indicators computed from close prices.

pub mod momentum;
pub mod registry;
pub mod trend;

pub use registry::{IndicatorProvider, TechnicalIndicators};
