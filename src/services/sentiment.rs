//! Sentiment scoring for news articles.

use crate::models::{NewsArticle, ScoredArticle};
use rand::Rng;

pub trait SentimentProvider: Send + Sync {
    /// Attach a score in [-1.0, 1.0] to every article, keeping their order
    fn score(&self, articles: &[NewsArticle]) -> Vec<ScoredArticle>;
}

/// Stand-in for a real sentiment model: uniform random scores
#[derive(Debug, Clone, Default)]
pub struct RandomSentimentScorer;

impl SentimentProvider for RandomSentimentScorer {
    fn score(&self, articles: &[NewsArticle]) -> Vec<ScoredArticle> {
        let mut rng = rand::thread_rng();
        articles
            .iter()
            .map(|article| ScoredArticle::new(article.clone(), rng.gen_range(-1.0..=1.0)))
            .collect()
    }
}
