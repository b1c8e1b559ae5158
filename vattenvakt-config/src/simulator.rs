//! Telemetry simulator configuration.

use serde::{Deserialize, Serialize};
use validator::{self, Validate, ValidationError};

/// Parameters for the simulated water source.
#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct SimulatorConfig {
    /// Seed for deterministic simulation.
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Per-tick tank inflow range.
    #[validate(nested)]
    #[serde(default)]
    pub flow: FlowConfig,

    /// Probability that a tick's inflow reaches the home. The remainder
    /// models supply lost before the home meter.
    #[validate(range(min = 0.0, max = 1.0))]
    #[serde(default = "default_supply_probability")]
    pub supply_probability: f64,
}

fn default_seed() -> u64 {
    42
}

fn default_supply_probability() -> f64 {
    0.9
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            flow: FlowConfig::default(),
            supply_probability: default_supply_probability(),
        }
    }
}

/// Inclusive per-tick inflow bounds, in litres.
#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
#[validate(schema(function = validate_flow_bounds))]
pub struct FlowConfig {
    #[validate(range(min = 1))]
    #[serde(default = "default_min_litres")]
    pub min_litres: u32,

    #[serde(default = "default_max_litres")]
    pub max_litres: u32,
}

fn default_min_litres() -> u32 {
    5
}

fn default_max_litres() -> u32 {
    9
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            min_litres: default_min_litres(),
            max_litres: default_max_litres(),
        }
    }
}

fn validate_flow_bounds(flow: &FlowConfig) -> Result<(), ValidationError> {
    if flow.min_litres > flow.max_litres {
        return Err(ValidationError::new("flow_min_exceeds_max"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_behavior() {
        let config = SimulatorConfig::default();
        assert_eq!(config.flow.min_litres, 5);
        assert_eq!(config.flow.max_litres, 9);
        assert_eq!(config.supply_probability, 0.9);
        config.validate().expect("default config should be valid");
    }

    #[test]
    fn inverted_flow_bounds_are_rejected() {
        let mut config = SimulatorConfig::default();
        config.flow.min_litres = 10;
        config.flow.max_litres = 5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn probability_outside_unit_interval_is_rejected() {
        let mut config = SimulatorConfig::default();
        config.supply_probability = 1.5;
        assert!(config.validate().is_err());
    }
}
