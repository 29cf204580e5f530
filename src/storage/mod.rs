pub mod json_snapshot;
pub mod traits;

pub use json_snapshot::JsonSnapshotStore;
pub use traits::CacheStore;

#[cfg(test)]
pub use traits::MockCacheStore;
