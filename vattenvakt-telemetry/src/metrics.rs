//! Prometheus metrics for the tick pipeline.

use prometheus::{IntCounter, IntGauge, Registry};

#[derive(Debug, Clone)]
pub struct MetricsRecorder {
    pub registry: Registry,
    pub ticks: IntCounter,
    pub tank_litres: IntCounter,
    pub home_litres: IntCounter,
    pub leakage_litres: IntGauge,
    pub alerts: IntCounter,
    pub milestones: IntCounter,
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsRecorder {
    pub fn new() -> Self {
        let registry = Registry::new();

        let ticks =
            IntCounter::new("vattenvakt_ticks_total", "Simulation ticks executed").unwrap();
        let tank_litres = IntCounter::new(
            "vattenvakt_tank_litres_total",
            "Cumulative litres into the tank",
        )
        .unwrap();
        let home_litres = IntCounter::new(
            "vattenvakt_home_litres_total",
            "Cumulative litres consumed by the home",
        )
        .unwrap();
        let leakage_litres = IntGauge::new(
            "vattenvakt_leakage_litres",
            "Current unaccounted litres between tank and home",
        )
        .unwrap();
        let alerts = IntCounter::new(
            "vattenvakt_alerts_total",
            "Alert activations (rising edges)",
        )
        .unwrap();
        let milestones = IntCounter::new(
            "vattenvakt_milestones_total",
            "Usage milestones crossed",
        )
        .unwrap();

        registry.register(Box::new(ticks.clone())).unwrap();
        registry.register(Box::new(tank_litres.clone())).unwrap();
        registry.register(Box::new(home_litres.clone())).unwrap();
        registry.register(Box::new(leakage_litres.clone())).unwrap();
        registry.register(Box::new(alerts.clone())).unwrap();
        registry.register(Box::new(milestones.clone())).unwrap();

        Self {
            registry,
            ticks,
            tank_litres,
            home_litres,
            leakage_litres,
            alerts,
            milestones,
        }
    }

    /// Renders all registered metrics in the Prometheus text format.
    pub fn gather_metrics(&self) -> Result<String, prometheus::Error> {
        use prometheus::Encoder;
        let encoder = prometheus::TextEncoder::new();
        let mut buffer = Vec::<u8>::new();
        encoder.encode(&self.registry.gather(), &mut buffer)?;
        Ok(String::from_utf8(buffer).unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_show_up_in_exposition() {
        let metrics = MetricsRecorder::new();
        metrics.ticks.inc();
        metrics.tank_litres.inc_by(7);
        metrics.home_litres.inc_by(7);
        metrics.leakage_litres.set(0);

        let rendered = metrics.gather_metrics().unwrap();
        assert!(rendered.contains("vattenvakt_ticks_total 1"));
        assert!(rendered.contains("vattenvakt_tank_litres_total 7"));
        assert!(rendered.contains("vattenvakt_leakage_litres 0"));
    }

    #[test]
    fn alert_counter_tracks_rising_edges_only() {
        let metrics = MetricsRecorder::new();
        metrics.alerts.inc();
        assert_eq!(metrics.alerts.get(), 1);
    }
}
