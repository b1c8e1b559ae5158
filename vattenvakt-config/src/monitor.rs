//! Monitoring and alerting configuration.
//!
//! Thresholds for the alert evaluator and the usage-milestone notifier.

use serde::{Deserialize, Serialize};
use validator::{self, Validate};

use crate::validation;

/// Monitoring configuration parameters.
#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct MonitorConfig {
    /// Alert thresholds.
    #[validate(nested)]
    #[serde(default)]
    pub thresholds: Thresholds,

    /// Usage percentages (of the allowed limit) that trigger a one-shot
    /// notification when first crossed.
    #[validate(custom(function = validation::validate_milestones))]
    #[serde(default = "default_milestones")]
    pub milestones: Vec<u8>,
}

fn default_milestones() -> Vec<u8> {
    vec![50, 90, 100]
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            thresholds: Thresholds::default(),
            milestones: default_milestones(),
        }
    }
}

/// Alert evaluation thresholds. Both comparisons are strict: totals sitting
/// exactly on a threshold do not raise an alert.
#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct Thresholds {
    /// Home consumption ceiling in litres.
    #[validate(range(min = 1))]
    #[serde(default = "default_allowed_limit")]
    pub allowed_limit: u64,

    /// Litres of unaccounted water tolerated before a leakage alert.
    #[serde(default = "default_leakage_litres")]
    pub leakage_litres: u64,
}

fn default_allowed_limit() -> u64 {
    100
}

fn default_leakage_litres() -> u64 {
    20
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            allowed_limit: default_allowed_limit(),
            leakage_litres: default_leakage_litres(),
        }
    }
}
