//! Summary of a fast (non-sleeping) simulation run.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use vattenvakt_detection::AlertStatus;

use crate::EngineError;

/// Everything a deterministic run can be compared or reported on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Seed the run was executed with.
    pub seed: u64,
    /// Ticks executed.
    pub ticks: u64,
    /// Wall time the simulated window represents, in milliseconds.
    pub simulated_ms: u64,
    pub tank_litres: u64,
    pub home_litres: u64,
    pub leakage_litres: i64,
    /// Ticks on which the alert condition held.
    pub alert_ticks: u64,
    /// Ticks whose inflow never reached the home.
    pub supply_loss_ticks: u64,
    /// Alert state after the final tick.
    pub final_status: AlertStatus,
    /// Hex BLAKE3 digest over every emitted sample.
    pub state_hash: String,
    pub generated_at: DateTime<Utc>,
}

impl SimulationReport {
    /// Compares the run's state hash against an expected digest.
    pub fn validate_hash(&self, expected: &str) -> Result<(), EngineError> {
        if self.state_hash != expected {
            return Err(EngineError::HashMismatch {
                expected: expected.to_string(),
                actual: self.state_hash.clone(),
            });
        }
        Ok(())
    }
}
