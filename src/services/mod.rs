//! Collaborators feeding and consuming the decision pipeline.

pub mod broker;
pub mod market_data;
pub mod news;
pub mod sentiment;

pub use broker::{Broker, BrokerError, StubBroker};
pub use market_data::{DummyMarketDataProvider, MarketDataProvider};
pub use news::{DummyNewsProvider, NewsProvider};
pub use sentiment::{RandomSentimentScorer, SentimentProvider};
