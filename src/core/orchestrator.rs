//! Per-symbol decision orchestration
//!
//! Each symbol gets its own candidate, its own backend request and its own
//! outcome, so one failing symbol never affects another.

use crate::indicators::IndicatorProvider;
use crate::llm::DecisionClient;
use crate::models::{
    Candidate, DecisionRequest, MarketOverview, NewsArticle, PositionSet, PriceSeries, Reading,
    TradeAction, ValidatedDecision,
};
use crate::services::SentimentProvider;
use futures_util::stream::{self, StreamExt};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Raw inputs gathered for one symbol before the backend is asked
#[derive(Debug, Clone)]
pub struct SymbolInput {
    pub symbol: String,
    pub prices: PriceSeries,
    pub news: Vec<NewsArticle>,
}

/// What happened for one symbol in a run
#[derive(Debug, Clone)]
pub struct SymbolRun {
    pub symbol: String,
    pub prices: PriceSeries,
    pub candidate: Candidate,
    pub decision: Option<ValidatedDecision>,
    /// Head action of the decision, if there was one and it could be read
    pub action: Option<TradeAction>,
}

impl SymbolRun {
    pub fn has_decision(&self) -> bool {
        self.action.is_some()
    }
}

pub struct DecisionOrchestrator {
    client: Arc<DecisionClient>,
    indicators: Arc<dyn IndicatorProvider>,
    sentiment: Arc<dyn SentimentProvider>,
}

impl DecisionOrchestrator {
    pub fn new(
        client: Arc<DecisionClient>,
        indicators: Arc<dyn IndicatorProvider>,
        sentiment: Arc<dyn SentimentProvider>,
    ) -> Self {
        Self {
            client,
            indicators,
            sentiment,
        }
    }

    pub fn build_candidate(&self, symbol: &str, prices: &PriceSeries, news: &[NewsArticle]) -> Candidate {
        Candidate {
            symbol: symbol.to_string(),
            latest_price: Reading::from(prices.latest()),
            technical_indicators: self.indicators.compute(&prices.closes),
            news_sentiment: self.sentiment.score(news),
        }
    }

    /// Decide a single symbol and return the head action, if any.
    pub async fn run(
        &self,
        symbol: &str,
        prices: &PriceSeries,
        news: &[NewsArticle],
        overview: &MarketOverview,
        positions: &PositionSet,
    ) -> Option<TradeAction> {
        let input = SymbolInput {
            symbol: symbol.to_string(),
            prices: prices.clone(),
            news: news.to_vec(),
        };
        self.evaluate(input, overview, positions).await.action
    }

    /// Decide a single symbol, keeping the inputs and the full response
    pub async fn evaluate(
        &self,
        input: SymbolInput,
        overview: &MarketOverview,
        positions: &PositionSet,
    ) -> SymbolRun {
        let SymbolInput {
            symbol,
            prices,
            news,
        } = input;

        let candidate = self.build_candidate(&symbol, &prices, &news);
        let request = DecisionRequest::new(overview.clone(), positions.clone(), vec![candidate.clone()]);

        let decision = self.client.decide(&request).await;
        let action = decision.as_ref().and_then(|d| head_action(&symbol, d));

        match &action {
            Some(action) => info!(
                symbol = %symbol,
                decision = %action.decision,
                confidence = ?action.confidence,
                "Decision received for {}",
                symbol
            ),
            None => warn!(symbol = %symbol, "No clear decision from the LLM for {}", symbol),
        }

        SymbolRun {
            symbol,
            prices,
            candidate,
            decision,
            action,
        }
    }

    /// Decide every symbol with at most `concurrency` backend calls in
    /// flight. Results come back in input order.
    pub async fn evaluate_universe(
        &self,
        inputs: Vec<SymbolInput>,
        overview: &MarketOverview,
        positions: &PositionSet,
        concurrency: usize,
    ) -> Vec<SymbolRun> {
        stream::iter(inputs)
            .map(|input| self.evaluate(input, overview, positions))
            .buffered(concurrency.max(1))
            .collect()
            .await
    }
}

/// The first entry of `actions`, or `None` when it is absent or unreadable.
pub fn head_action(symbol: &str, decision: &ValidatedDecision) -> Option<TradeAction> {
    if decision.actions.len() > 1 {
        debug!(
            symbol = %symbol,
            count = decision.actions.len(),
            "Decision carried {} actions, applying only the first",
            decision.actions.len()
        );
    }

    match decision.head_action()? {
        Ok(action) => Some(action),
        Err(e) => {
            warn!(symbol = %symbol, error = %e, "Head action for {} is malformed", symbol);
            None
        }
    }
}
