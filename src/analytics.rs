use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::info;

/// Optional-tracking initialization, gated behind cookie consent.
///
/// This is a placeholder for a real tracker: initialization only logs. The
/// consent provider calls [`initialize`](Analytics::initialize) after an
/// acceptance is persisted, and the invocation count lets tests pin down the
/// once-per-acceptance guarantee.
pub struct Analytics {
    initializations: AtomicUsize,
}

impl Analytics {
    pub fn new() -> Self {
        Self {
            initializations: AtomicUsize::new(0),
        }
    }

    /// Enable optional tracking.
    pub fn initialize(&self) {
        self.initializations.fetch_add(1, Ordering::SeqCst);
        info!("Analytics initialized after consent");
    }

    /// Whether tracking has been enabled this process.
    pub fn is_initialized(&self) -> bool {
        self.times_initialized() > 0
    }

    /// How many times tracking initialization ran.
    pub fn times_initialized(&self) -> usize {
        self.initializations.load(Ordering::SeqCst)
    }
}

impl Default for Analytics {
    fn default() -> Self {
        Self::new()
    }
}
