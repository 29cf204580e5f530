pub mod gnews;
pub mod traits;

pub use gnews::{GnewsProvider, DEFAULT_BASE_URL};
pub use traits::NewsProvider;

#[cfg(test)]
pub use traits::MockNewsProvider;
