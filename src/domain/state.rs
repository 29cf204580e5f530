use serde::{Deserialize, Serialize};

use crate::domain::Article;

/// Caller-facing error state. The two variants are mutually exclusive and
/// replace each other in place; `QuotaExceeded` gets its own variant so the
/// view can render a specific message instead of the generic one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedError {
    QuotaExceeded,
    FetchFailed,
}

impl std::fmt::Display for FeedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeedError::QuotaExceeded => write!(
                f,
                "We have reached our API usage limit. Please try again tomorrow."
            ),
            FeedError::FetchFailed => write!(f, "Failed to fetch news"),
        }
    }
}

/// The view state published by the coordinator: the headline plus grid
/// articles, the current error state, and whether a manual refresh is
/// outstanding. Setting an error clears the data display.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewsState {
    pub headline: Option<Article>,
    pub articles: Vec<Article>,
    pub error: Option<FeedError>,
    pub is_refreshing: bool,
}

impl NewsState {
    pub fn with_articles(headline: Option<Article>, articles: Vec<Article>) -> Self {
        Self {
            headline,
            articles,
            error: None,
            is_refreshing: false,
        }
    }

    pub fn with_error(error: FeedError) -> Self {
        Self {
            headline: None,
            articles: Vec::new(),
            error: Some(error),
            is_refreshing: false,
        }
    }
}
