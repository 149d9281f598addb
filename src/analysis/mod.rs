//! Turns scraped fashion pages into trend signals.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::crawler::CrawlData;

pub mod categories;
pub mod colors;
pub mod headlines;
pub mod wordfreq;

pub use categories::{CATEGORIES, CategoryScores, score_categories};
pub use colors::{ColorTrend, Season, colors_for, current_colors, season_for};
pub use headlines::score_headlines;
pub use wordfreq::{WeightedWord, summarize};

/// A token lifted from scraped headlines, scored 0-100.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendingItem {
    pub name: String,
    pub trend_score: u8,
}

impl TrendingItem {
    pub fn new(name: impl Into<String>, trend_score: u8) -> Self {
        Self { name: name.into(), trend_score }
    }
}

/// The full result of one refresh.
///
/// `categories` and `popularity` are parallel: entry `i` of one belongs to entry `i` of the other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendSnapshot {
    pub categories: Vec<String>,
    pub popularity: Vec<u8>,
    pub trending_items: Vec<TrendingItem>,
}

impl TrendSnapshot {
    /// Canned values served whenever a refresh cannot produce real ones.
    pub fn fallback() -> Self {
        Self {
            categories: CATEGORIES.iter().map(|c| c.to_string()).collect(),
            popularity: vec![85, 60, 75, 80, 65, 90],
            trending_items: vec![
                TrendingItem::new("Sustainable Fashion", 95),
                TrendingItem::new("Oversized Blazers", 88),
                TrendingItem::new("Wide-leg Pants", 82),
                TrendingItem::new("Platform Shoes", 78),
                TrendingItem::new("Crop Tops", 75),
            ],
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PipelineError {
    #[error("no source page could be fetched")]
    NoDocuments,
    #[error("scraped pages contained no usable words")]
    NoWords,
}

/// Scores a crawl. Fails when there is nothing to score.
pub fn build_snapshot(crawl: &CrawlData) -> Result<TrendSnapshot, PipelineError> {
    if crawl.pages == 0 {
        return Err(PipelineError::NoDocuments);
    }

    let words = summarize(&crawl.text);
    if words.is_empty() {
        return Err(PipelineError::NoWords);
    }

    let CategoryScores { categories, popularity } = score_categories(&words);

    Ok(TrendSnapshot {
        categories,
        popularity,
        trending_items: score_headlines(&crawl.headings),
    })
}
