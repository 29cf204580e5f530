pub mod article;
pub mod cache;
pub mod category;
pub mod state;

pub use article::{Article, Source, PLACEHOLDER_IMAGE};
pub use cache::{cache_key, CacheEntry, NewsCache};
pub use category::Category;
pub use state::{FeedError, NewsState};
