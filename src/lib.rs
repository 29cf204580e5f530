//! News-reading client built around a persistent, rate-limited fetch cache.
//!
//! [`services::NewsFeedService`] coordinates headline fetches per
//! (category | search) key: fresh cache entries are served without touching
//! the network, bursts of key changes are debounced into one call, and a
//! global rate floor spaces out network calls. The cache is snapshotted to
//! disk after every successful fetch and rehydrated at startup.

pub mod cli;
pub mod clock;
pub mod config;
pub mod domain;
pub mod errors;
pub mod provider;
pub mod services;
pub mod storage;
