use std::sync::Arc;

use crate::domain::NewsCache;
use crate::errors::NewsResult;

/// Durable store for the query cache: one named snapshot holding the whole
/// serialized map. Read once at coordinator construction, overwritten in
/// full on every successful fetch. There are no partial updates.
#[cfg_attr(test, mockall::automock)]
pub trait CacheStore: Send + Sync {
    fn load(&self) -> NewsResult<NewsCache>;
    fn save(&self, cache: &NewsCache) -> NewsResult<()>;
}

impl<T: CacheStore + ?Sized> CacheStore for Arc<T> {
    fn load(&self) -> NewsResult<NewsCache> {
        (**self).load()
    }

    fn save(&self, cache: &NewsCache) -> NewsResult<()> {
        (**self).save(cache)
    }
}
