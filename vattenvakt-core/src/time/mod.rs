//! ## vattenvakt-core::time
//! **Simulated clock for fast-forward runs**
//!
//! Simulation mode does not sleep between ticks; the clock advances by one
//! nominal tick period instead, so reports can state how much wall time the
//! simulated window represents.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Clone, Default)]
pub struct SimClock {
    elapsed_ms: Arc<AtomicU64>,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Milliseconds of simulated time since the run started.
    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms.load(Ordering::Acquire)
    }

    pub fn advance_ms(&self, ms: u64) {
        self.elapsed_ms.fetch_add(ms, Ordering::Release);
    }
}
