use crate::models::indicators::{IndicatorMap, Reading};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsArticle {
    pub headline: String,
    pub source: String,
    pub published_at: String,
    pub summary: String,
}

/// News article with a sentiment score in [-1.0, 1.0]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredArticle {
    #[serde(flatten)]
    pub article: NewsArticle,
    pub sentiment: f64,
}

impl ScoredArticle {
    pub fn new(article: NewsArticle, sentiment: f64) -> Self {
        let sentiment = if sentiment.is_finite() {
            sentiment.clamp(-1.0, 1.0)
        } else {
            0.0
        };
        Self { article, sentiment }
    }
}

/// Everything the backend gets to see about one symbol
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub symbol: String,
    pub latest_price: Reading,
    pub technical_indicators: IndicatorMap,
    pub news_sentiment: Vec<ScoredArticle>,
}
