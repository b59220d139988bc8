//! News feed about a country

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{DecodeError, FromPayload};

const UNKNOWN_AUTHOR: &str = "unknown";

/// A single article
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewsItem {
    pub source: String,
    pub author: String,
    pub published_at: DateTime<Utc>,
    pub title: String,
    pub description: Option<String>,
}

/// Articles in provider order (newest first)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewsFeed {
    pub items: Vec<NewsItem>,
}

/// NewsAPI `everything` response
#[derive(Debug, Deserialize)]
struct NewsApiResponse {
    articles: Vec<Article>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Article {
    source: ArticleSource,
    author: Option<String>,
    published_at: DateTime<Utc>,
    title: String,
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ArticleSource {
    name: String,
}

impl From<Article> for NewsItem {
    fn from(article: Article) -> Self {
        let author = article
            .author
            .filter(|a| !a.trim().is_empty())
            .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string());

        Self {
            source: article.source.name,
            author,
            published_at: article.published_at,
            title: article.title,
            description: article.description,
        }
    }
}

impl FromPayload for NewsFeed {
    fn from_payload(payload: &[u8]) -> Result<Self, DecodeError> {
        let response: NewsApiResponse = serde_json::from_slice(payload)?;
        Ok(Self {
            items: response.articles.into_iter().map(NewsItem::from).collect(),
        })
    }
}
