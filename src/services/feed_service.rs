use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use log::{debug, warn};
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::clock::Clock;
use crate::domain::{cache_key, CacheEntry, Category, FeedError, NewsCache, NewsState};
use crate::errors::NewsError;
use crate::provider::NewsProvider;
use crate::storage::CacheStore;

pub const DEBOUNCE_DELAY: Duration = Duration::from_millis(500);
pub const FRESHNESS_WINDOW: Duration = Duration::from_secs(15 * 60);
pub const RATE_FLOOR: Duration = Duration::from_secs(30);
/// Grid size below the headline; longer responses are truncated.
pub const MAX_GRID_ARTICLES: usize = 6;

#[derive(Debug, Clone)]
pub struct FeedOptions {
    pub debounce: Duration,
    pub freshness_window: Duration,
    pub rate_floor: Duration,
    pub max_articles: usize,
}

impl Default for FeedOptions {
    fn default() -> Self {
        Self {
            debounce: DEBOUNCE_DELAY,
            freshness_window: FRESHNESS_WINDOW,
            rate_floor: RATE_FLOOR,
            max_articles: MAX_GRID_ARTICLES,
        }
    }
}

/// How one pass through the fetch pipeline resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FetchOutcome {
    /// Served from a fresh cache entry, zero network calls.
    Cached,
    /// Fetched from the provider and cached.
    Fetched,
    /// Suppressed by the 30-second rate floor; no state change.
    Throttled,
    /// Response arrived after a newer call was issued and was discarded.
    Superseded,
    /// Provider call failed; an error state was published.
    Failed,
}

/// Result of a manual refresh. `Throttled` makes an ignored refresh visible
/// to the caller instead of silently doing nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    Completed,
    Throttled,
}

/// Coordinates news fetches for (category | search) keys: serves fresh cache
/// entries, debounces bursts of key changes, enforces a global rate floor
/// between network calls, and persists the cache snapshot after every
/// successful fetch. State reaches the caller through a watch channel.
pub struct NewsFeedService<P, S, C> {
    inner: Arc<FeedInner<P, S, C>>,
}

struct FeedInner<P, S, C> {
    provider: P,
    store: S,
    clock: C,
    options: FeedOptions,
    state_tx: watch::Sender<NewsState>,
    shared: Mutex<FeedShared>,
    pending: Mutex<Option<JoinHandle<()>>>,
    generation: AtomicU64,
}

struct FeedShared {
    cache: NewsCache,
    /// Issue time of the last network call of any key, for the rate floor.
    last_fetch_ms: Option<i64>,
}

impl<P, S, C> NewsFeedService<P, S, C>
where
    P: NewsProvider + 'static,
    S: CacheStore + 'static,
    C: Clock + 'static,
{
    /// Builds the coordinator, rehydrating the cache snapshot once. A missing
    /// or corrupt snapshot starts empty; loading never fails construction.
    /// The initial published state is seeded from the cached default-category
    /// entry when one exists.
    pub fn new(provider: P, store: S, clock: C, options: FeedOptions) -> Self {
        let cache = store.load().unwrap_or_else(|e| {
            warn!("could not load cache snapshot: {}", e);
            NewsCache::default()
        });

        let initial = cache
            .get(&cache_key(Category::default(), ""))
            .map(|entry| NewsState::with_articles(entry.headline.clone(), entry.articles.clone()))
            .unwrap_or_default();
        let (state_tx, _) = watch::channel(initial);

        Self {
            inner: Arc::new(FeedInner {
                provider,
                store,
                clock,
                options,
                state_tx,
                shared: Mutex::new(FeedShared {
                    cache,
                    last_fetch_ms: None,
                }),
                pending: Mutex::new(None),
                generation: AtomicU64::new(0),
            }),
        }
    }

    /// Subscribe to `(headline, articles, error, is_refreshing)` updates.
    pub fn subscribe(&self) -> watch::Receiver<NewsState> {
        self.inner.state_tx.subscribe()
    }

    /// Debounced fetch for the given key. Rapid successive calls collapse
    /// into a single network call for the last-requested key; only the most
    /// recently scheduled request survives, earlier scheduled-but-unfired
    /// ones are discarded with no side effect.
    pub fn request(&self, category: Category, query: &str) {
        let inner = Arc::clone(&self.inner);
        let query = query.to_string();

        let handle = tokio::spawn(async move {
            tokio::time::sleep(inner.options.debounce).await;

            // Once the timer fires the call is committed: a later request
            // aborts pending timers but never an issued fetch, whose late
            // response is instead discarded by the generation check.
            let issued = Arc::clone(&inner);
            tokio::spawn(async move {
                issued.fetch(category, &query, false).await;
            });
        });

        let mut pending = self
            .inner
            .pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(prev) = pending.replace(handle) {
            prev.abort();
        }
    }

    /// Manual refresh: bypasses debounce and the freshness window but still
    /// honors the rate floor, as backpressure against rapid double-clicks.
    pub async fn refresh(&self, category: Category, query: &str) -> RefreshOutcome {
        self.inner.state_tx.send_modify(|s| s.is_refreshing = true);

        let outcome = self.inner.fetch(category, query, true).await;

        self.inner.state_tx.send_modify(|s| s.is_refreshing = false);

        match outcome {
            FetchOutcome::Throttled => RefreshOutcome::Throttled,
            _ => RefreshOutcome::Completed,
        }
    }
}

impl<P, S, C> FeedInner<P, S, C>
where
    P: NewsProvider,
    S: CacheStore,
    C: Clock,
{
    async fn fetch(&self, category: Category, query: &str, manual: bool) -> FetchOutcome {
        let key = cache_key(category, query);
        let now = self.clock.now_millis();

        {
            let mut shared = self.shared.lock().unwrap_or_else(PoisonError::into_inner);

            if !manual {
                if let Some(entry) = shared.cache.get(&key) {
                    if entry.is_fresh(now, self.options.freshness_window) {
                        debug!("cache hit for {} (age {}ms)", key, entry.age_ms(now));
                        self.state_tx.send_replace(NewsState::with_articles(
                            entry.headline.clone(),
                            entry.articles.clone(),
                        ));
                        return FetchOutcome::Cached;
                    }
                }
            }

            if let Some(last) = shared.last_fetch_ms {
                if now - last < self.options.rate_floor.as_millis() as i64 {
                    debug!("rate floor suppressed fetch for {}", key);
                    return FetchOutcome::Throttled;
                }
            }

            // Issue time is recorded before the call goes out, so a slow
            // response still counts against the floor.
            shared.last_fetch_ms = Some(now);
        }

        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let result = if query.is_empty() {
            self.provider.top_headlines(category).await
        } else {
            self.provider.search(query).await
        };

        if self.generation.load(Ordering::SeqCst) != generation {
            debug!("discarding superseded response for {}", key);
            return FetchOutcome::Superseded;
        }

        match result {
            Ok(mut articles) => {
                for article in &mut articles {
                    article.normalize_image();
                }

                let mut rest = articles.into_iter();
                let headline = rest.next();
                let articles: Vec<_> = rest.take(self.options.max_articles).collect();

                let snapshot = {
                    let mut shared = self.shared.lock().unwrap_or_else(PoisonError::into_inner);
                    shared.cache.insert(
                        key,
                        CacheEntry {
                            headline: headline.clone(),
                            articles: articles.clone(),
                            timestamp_ms: now,
                        },
                    );
                    shared.cache.clone()
                };

                // Persisted outside the lock so a slow write cannot stall
                // fetch bookkeeping. Best-effort; a write failure never
                // fails the fetch.
                if let Err(e) = self.store.save(&snapshot) {
                    warn!("could not persist cache snapshot: {}", e);
                }

                self.state_tx
                    .send_replace(NewsState::with_articles(headline, articles));
                FetchOutcome::Fetched
            }
            Err(NewsError::QuotaExceeded) => {
                self.state_tx
                    .send_replace(NewsState::with_error(FeedError::QuotaExceeded));
                FetchOutcome::Failed
            }
            Err(e) => {
                warn!("fetch failed for {}: {}", key, e);
                self.state_tx
                    .send_replace(NewsState::with_error(FeedError::FetchFailed));
                FetchOutcome::Failed
            }
        }
    }
}
