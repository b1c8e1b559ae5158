//! One-shot usage-milestone notifications.
//!
//! Fires once when home consumption first crosses each configured
//! percentage of the allowed limit (default 50%, 90%, 100%). Crossings are
//! never re-fired, even if a later tick re-checks the same total.

use serde::{Deserialize, Serialize};

/// A milestone that was crossed this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MilestoneCrossing {
    /// Percentage of the allowed limit.
    pub percent: u8,
    /// Home total at the time of crossing.
    pub home_litres: u64,
}

/// Tracks which usage milestones have fired.
#[derive(Debug, Clone)]
pub struct MilestoneTracker {
    allowed_limit: u64,
    pending: Vec<u8>,
}

impl MilestoneTracker {
    /// `milestones` must be ascending percentages in 1..=100; configuration
    /// validation guarantees this before the tracker is built.
    pub fn new(allowed_limit: u64, milestones: &[u8]) -> Self {
        Self {
            allowed_limit,
            pending: milestones.to_vec(),
        }
    }

    /// Returns every not-yet-fired milestone the given total has reached,
    /// in ascending order. A single large tick can cross several at once.
    pub fn check(&mut self, home_litres: u64) -> Vec<MilestoneCrossing> {
        let mut crossed = Vec::new();
        while let Some(&percent) = self.pending.first() {
            // home / limit >= percent / 100, kept in integer arithmetic.
            if home_litres * 100 >= self.allowed_limit * u64::from(percent) {
                crossed.push(MilestoneCrossing {
                    percent,
                    home_litres,
                });
                self.pending.remove(0);
            } else {
                break;
            }
        }
        crossed
    }
}
