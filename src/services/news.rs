//! News provider interface and fixed placeholder articles.

use crate::models::NewsArticle;
use std::collections::HashMap;

pub trait NewsProvider: Send + Sync {
    fn get_news(
        &self,
        symbols: &[String],
    ) -> Result<HashMap<String, Vec<NewsArticle>>, Box<dyn std::error::Error + Send + Sync>>;
}

/// Two canned articles per symbol
#[derive(Debug, Clone, Default)]
pub struct DummyNewsProvider;

impl NewsProvider for DummyNewsProvider {
    fn get_news(
        &self,
        symbols: &[String],
    ) -> Result<HashMap<String, Vec<NewsArticle>>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(symbols
            .iter()
            .map(|symbol| {
                let articles = vec![
                    NewsArticle {
                        headline: format!("{} announces Q3 earnings.", symbol),
                        source: "Dummy News".to_string(),
                        published_at: "2023-10-26T10:00:00Z".to_string(),
                        summary: format!("Dummy summary for {} earnings.", symbol),
                    },
                    NewsArticle {
                        headline: format!("{} stock movement today.", symbol),
                        source: "Dummy News".to_string(),
                        published_at: "2023-10-26T11:30:00Z".to_string(),
                        summary: format!("Dummy summary for {} stock movement.", symbol),
                    },
                ];
                (symbol.clone(), articles)
            })
            .collect())
    }
}
