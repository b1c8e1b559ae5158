//! Cumulative flow counters shared by the simulator, evaluator, and renderer.

use serde::{Deserialize, Serialize};

/// One tick's worth of simulated flow.
///
/// `home_increment` is either `0` or exactly `tank_increment`: a tick's
/// inflow reaches the home in full or not at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowSample {
    /// Litres that entered the tank this tick.
    pub tank_increment: u32,
    /// Litres that reached the home this tick.
    pub home_increment: u32,
}

impl FlowSample {
    /// True when this tick's inflow bypassed the home entirely.
    pub fn is_supply_loss(&self) -> bool {
        self.home_increment == 0 && self.tank_increment > 0
    }
}

/// Running litre totals since simulation start.
///
/// Invariant: `home_litres <= tank_litres`. It holds inductively because
/// both start at zero and every applied sample satisfies
/// `home_increment <= tank_increment`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageTotals {
    /// Cumulative litres into the tank.
    pub tank_litres: u64,
    /// Cumulative litres consumed by the home.
    pub home_litres: u64,
}

impl UsageTotals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one tick's sample into the totals.
    pub fn apply(&mut self, sample: &FlowSample) {
        debug_assert!(sample.home_increment <= sample.tank_increment);
        self.tank_litres += u64::from(sample.tank_increment);
        self.home_litres += u64::from(sample.home_increment);
    }

    /// Litres unaccounted for between tank inflow and home consumption.
    ///
    /// Signed so the value stays well defined for any pair of totals, even
    /// ones the simulator cannot produce.
    pub fn leakage_litres(&self) -> i64 {
        self.tank_litres as i64 - self.home_litres as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn totals_start_at_zero() {
        let totals = UsageTotals::new();
        assert_eq!(totals.tank_litres, 0);
        assert_eq!(totals.home_litres, 0);
        assert_eq!(totals.leakage_litres(), 0);
    }

    #[test]
    fn apply_accumulates_both_counters() {
        let mut totals = UsageTotals::new();
        totals.apply(&FlowSample {
            tank_increment: 7,
            home_increment: 7,
        });
        totals.apply(&FlowSample {
            tank_increment: 5,
            home_increment: 0,
        });
        assert_eq!(totals.tank_litres, 12);
        assert_eq!(totals.home_litres, 7);
        assert_eq!(totals.leakage_litres(), 5);
    }

    #[test]
    fn supply_loss_only_when_home_gets_nothing() {
        let lost = FlowSample {
            tank_increment: 6,
            home_increment: 0,
        };
        let delivered = FlowSample {
            tank_increment: 6,
            home_increment: 6,
        };
        assert!(lost.is_supply_loss());
        assert!(!delivered.is_supply_loss());
    }

    proptest! {
        /// `home <= tank` is preserved under any sequence of well-formed
        /// samples.
        #[test]
        fn invariant_holds_under_arbitrary_samples(
            samples in prop::collection::vec((0u32..=1000, any::<bool>()), 0..200)
        ) {
            let mut totals = UsageTotals::new();
            for (tank, delivered) in samples {
                let sample = FlowSample {
                    tank_increment: tank,
                    home_increment: if delivered { tank } else { 0 },
                };
                totals.apply(&sample);
                prop_assert!(totals.home_litres <= totals.tank_litres);
                prop_assert!(totals.leakage_litres() >= 0);
            }
        }
    }
}
