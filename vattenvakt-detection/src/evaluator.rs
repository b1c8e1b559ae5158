//! Alert decision logic.
//!
//! A pure function of the current totals and the configured thresholds.
//! Both comparisons are strict: totals sitting exactly on a threshold do
//! not raise an alert.

use serde::{Deserialize, Serialize};

use vattenvakt_config::Thresholds;
use vattenvakt_core::UsageTotals;

/// Why an alert is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertCause {
    /// Unaccounted water between tank and home exceeded the tolerance.
    Leakage { leaked_litres: u64 },
    /// Home consumption exceeded the allowed limit.
    LimitExceeded { home_litres: u64 },
}

/// Per-tick alert state. Derived, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertStatus {
    Clear,
    Active(AlertCause),
}

impl AlertStatus {
    pub fn is_active(&self) -> bool {
        matches!(self, AlertStatus::Active(_))
    }
}

/// Evaluates totals against fixed thresholds.
#[derive(Debug, Clone)]
pub struct AlertEvaluator {
    thresholds: Thresholds,
}

impl AlertEvaluator {
    pub fn new(thresholds: Thresholds) -> Self {
        Self { thresholds }
    }

    /// Decides alert visibility for the given totals.
    ///
    /// Active iff `leakage > leakage_litres` or `home > allowed_limit`.
    /// When both hold, leakage is reported as the cause, matching the order
    /// the conditions are checked.
    pub fn evaluate(&self, totals: &UsageTotals) -> AlertStatus {
        let leakage = totals.leakage_litres();
        if leakage > self.thresholds.leakage_litres as i64 {
            return AlertStatus::Active(AlertCause::Leakage {
                leaked_litres: leakage as u64,
            });
        }
        if totals.home_litres > self.thresholds.allowed_limit {
            return AlertStatus::Active(AlertCause::LimitExceeded {
                home_litres: totals.home_litres,
            });
        }
        AlertStatus::Clear
    }
}
