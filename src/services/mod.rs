pub mod feed_service;

pub use feed_service::{
    FeedOptions, NewsFeedService, RefreshOutcome, DEBOUNCE_DELAY, FRESHNESS_WINDOW,
    MAX_GRID_ARTICLES, RATE_FLOOR,
};
