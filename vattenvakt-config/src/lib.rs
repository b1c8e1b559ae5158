//! # Vattenvakt Configuration System
//!
//! Layered configuration for the water monitoring simulator, validated
//! before the first tick ever runs.
//!
//! ## Features
//! - **Unified Configuration**: Single source of truth across all components
//! - **Fail-Fast Validation**: A bad interval or threshold aborts startup
//! - **Environment Awareness**: `VATTENVAKT_ENV` selects override files

#![warn(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

mod error;
mod monitor;
mod runtime;
mod simulator;
mod telemetry;
mod validation;

pub use error::ConfigError;
pub use monitor::MonitorConfig;
pub use monitor::Thresholds;
pub use runtime::RuntimeConfig;
pub use simulator::FlowConfig;
pub use simulator::SimulatorConfig;
pub use telemetry::TelemetryConfig;

/// Top-level configuration container for all Vattenvakt components.
#[derive(Debug, Serialize, Deserialize, Validate, Default)]
pub struct VattenvaktConfig {
    /// Tick scheduling parameters.
    #[validate(nested)]
    #[serde(default)]
    pub runtime: RuntimeConfig,

    /// Simulated water source parameters.
    #[validate(nested)]
    #[serde(default)]
    pub simulator: SimulatorConfig,

    /// Alerting thresholds and usage milestones.
    #[validate(nested)]
    #[serde(default)]
    pub monitor: MonitorConfig,

    /// Logging and metrics configuration.
    #[validate(nested)]
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl VattenvaktConfig {
    /// Load configuration from default files and environment.
    ///
    /// Hierarchy:
    /// 1. Default values
    /// 2. `config/vattenvakt.yaml` - base settings. If missing, defaults are used.
    /// 3. `config/<environment>.yaml` - environment-specific overrides.
    /// 4. `VATTENVAKT_*` environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(VattenvaktConfig::default()));

        if Path::new("config/vattenvakt.yaml").exists() {
            figment = figment.merge(Yaml::file("config/vattenvakt.yaml"));
        }

        let env = std::env::var("VATTENVAKT_ENV").unwrap_or_else(|_| "production".into());
        let env_file = format!("config/{}.yaml", env);
        if Path::new(&env_file).exists() {
            figment = figment.merge(Yaml::file(env_file));
        }

        figment
            .merge(Env::prefixed("VATTENVAKT_").split("__"))
            .extract()
            .map_err(ConfigError::from)
            .and_then(|config: Self| {
                config.validate()?;
                Ok(config)
            })
    }

    /// Load configuration from a specific path, applying the same env
    /// overrides and validation.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound(PathBuf::from(path)));
        }

        Figment::from(Serialized::defaults(VattenvaktConfig::default()))
            .merge(Yaml::file(path))
            .merge(Env::prefixed("VATTENVAKT_").split("__"))
            .extract()
            .map_err(ConfigError::from)
            .and_then(|config: Self| {
                config.validate()?;
                Ok(config)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_default_config_validates() {
        let config = VattenvaktConfig::default();
        config.validate().expect("default config should validate");
        assert_eq!(config.runtime.tick_interval_ms, 2000);
        assert_eq!(config.monitor.thresholds.allowed_limit, 100);
    }

    #[test]
    fn missing_file_is_reported() {
        let err = VattenvaktConfig::load_from_path("no/such/file.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }

    #[test]
    fn yaml_overrides_defaults() {
        let dir = std::env::temp_dir().join("vattenvakt-config-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("override.yaml");
        std::fs::write(
            &path,
            "runtime:\n  tick_interval_ms: 500\nmonitor:\n  thresholds:\n    allowed_limit: 250\n",
        )
        .unwrap();

        let config = VattenvaktConfig::load_from_path(&path).unwrap();
        assert_eq!(config.runtime.tick_interval_ms, 500);
        assert_eq!(config.monitor.thresholds.allowed_limit, 250);
        // Untouched sections keep their defaults.
        assert_eq!(config.simulator.flow.min_litres, 5);
    }

    #[test]
    fn invalid_interval_fails_at_load() {
        let dir = std::env::temp_dir().join("vattenvakt-config-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("bad-interval.yaml");
        std::fs::write(&path, "runtime:\n  tick_interval_ms: 0\n").unwrap();

        let err = VattenvaktConfig::load_from_path(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }
}
