use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Global loading indicator: counts requests sent with `loading: true`
#[derive(Debug, Clone, Default)]
pub struct LoadingTracker {
    in_flight: Arc<AtomicUsize>,
}

impl LoadingTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark one request as started; the returned guard ends it on drop
    pub fn begin(&self) -> LoadingGuard {
        let previous = self.in_flight.fetch_add(1, Ordering::SeqCst);
        if previous == 0 {
            tracing::trace!("loading indicator on");
        }
        LoadingGuard {
            in_flight: Arc::clone(&self.in_flight),
        }
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight() > 0
    }
}

#[derive(Debug)]
pub struct LoadingGuard {
    in_flight: Arc<AtomicUsize>,
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        if self.in_flight.fetch_sub(1, Ordering::SeqCst) == 1 {
            tracing::trace!("loading indicator off");
        }
    }
}
