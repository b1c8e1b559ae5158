//! Tick scheduling configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use validator::{self, Validate};

/// Scheduling parameters for the tick loop.
#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct RuntimeConfig {
    /// Period between ticks in milliseconds. Zero is rejected at load time
    /// rather than producing a busy loop.
    #[validate(range(min = 1))]
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
}

fn default_tick_interval_ms() -> u64 {
    2000
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: default_tick_interval_ms(),
        }
    }
}

impl RuntimeConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_interval_is_two_seconds() {
        let config = RuntimeConfig::default();
        assert_eq!(config.tick_interval(), Duration::from_secs(2));
        config.validate().expect("default config should be valid");
    }

    #[test]
    fn zero_interval_is_rejected() {
        let config = RuntimeConfig {
            tick_interval_ms: 0,
        };
        assert!(config.validate().is_err());
    }
}
