use std::sync::Arc;

use chrono::Utc;

/// Wall-clock source for cache timestamps. Entries persist across restarts,
/// so freshness and the rate floor are computed from epoch millis rather
/// than process-local instants; the seam exists so tests can drive time.
#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    fn now_millis(&self) -> i64;
}

impl<T: Clock + ?Sized> Clock for Arc<T> {
    fn now_millis(&self) -> i64 {
        (**self).now_millis()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}
