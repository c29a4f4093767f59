//! Shared data models spanning the decision pipeline.

pub mod candidate;
pub mod decision;
pub mod indicators;
pub mod market;
pub mod order;

pub use candidate::{Candidate, NewsArticle, ScoredArticle};
pub use decision::{DecisionRequest, TradeAction, TradeDecision, ValidatedDecision};
pub use indicators::{EmaIndicator, IndicatorMap, Reading, RsiIndicator};
pub use market::{AccountInfo, MarketOverview, Position, PositionSet, PriceSeries};
pub use order::{OrderIntent, OrderReceipt, OrderSide};
