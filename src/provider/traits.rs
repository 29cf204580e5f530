use std::sync::Arc;

use crate::domain::{Article, Category};
use crate::errors::NewsResult;

/// A news provider exposes two queries: top headlines for an enumerated
/// category, and free-text search. Both return raw articles in provider
/// order; normalization and headline/grid splitting happen downstream.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait NewsProvider: Send + Sync {
    async fn top_headlines(&self, category: Category) -> NewsResult<Vec<Article>>;

    async fn search(&self, query: &str) -> NewsResult<Vec<Article>>;
}

#[async_trait::async_trait]
impl<T: NewsProvider + ?Sized> NewsProvider for Arc<T> {
    async fn top_headlines(&self, category: Category) -> NewsResult<Vec<Article>> {
        (**self).top_headlines(category).await
    }

    async fn search(&self, query: &str) -> NewsResult<Vec<Article>> {
        (**self).search(query).await
    }
}
