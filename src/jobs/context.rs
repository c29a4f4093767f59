//! Job context for dependency injection

use crate::config::{Config, ConfigError};
use crate::core::DecisionOrchestrator;
use crate::indicators::TechnicalIndicators;
use crate::llm::DecisionClient;
use crate::report::ReportRenderer;
use crate::services::{
    Broker, DummyMarketDataProvider, DummyNewsProvider, MarketDataProvider, NewsProvider,
    RandomSentimentScorer, StubBroker,
};
use std::sync::Arc;

/// Everything a job needs, built once per process
pub struct JobContext {
    pub config: Config,
    pub market_data: Arc<dyn MarketDataProvider>,
    pub news: Arc<dyn NewsProvider>,
    pub orchestrator: DecisionOrchestrator,
    pub broker: Arc<dyn Broker>,
    pub renderer: ReportRenderer,
}

impl JobContext {
    pub fn new(
        config: Config,
        market_data: Arc<dyn MarketDataProvider>,
        news: Arc<dyn NewsProvider>,
        orchestrator: DecisionOrchestrator,
        broker: Arc<dyn Broker>,
    ) -> Self {
        let renderer = ReportRenderer::new(config.paths.reports_dir.clone());
        Self {
            config,
            market_data,
            news,
            orchestrator,
            broker,
            renderer,
        }
    }

    /// Context with the placeholder data sources, the stub broker and the
    /// configured chat-completions backend
    pub fn from_config(config: Config) -> Result<Self, ConfigError> {
        let client = Arc::new(DecisionClient::new(&config.llm)?);
        let orchestrator = DecisionOrchestrator::new(
            client,
            Arc::new(TechnicalIndicators::new()),
            Arc::new(RandomSentimentScorer),
        );

        Ok(Self::new(
            config,
            Arc::new(DummyMarketDataProvider::new()),
            Arc::new(DummyNewsProvider),
            orchestrator,
            Arc::new(StubBroker),
        ))
    }
}
