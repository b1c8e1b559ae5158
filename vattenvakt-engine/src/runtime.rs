//! Runtime core - drives the simulator, evaluator, milestone tracker, and
//! renderer through the strict per-tick sequence.

use chrono::Utc;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, info, warn};

use vattenvakt_config::VattenvaktConfig;
use vattenvakt_core::{FlowSample, SimClock, UsageTotals};
use vattenvakt_detection::{AlertEvaluator, AlertStatus, MilestoneCrossing, MilestoneTracker};
use vattenvakt_simulator::Simulator;
use vattenvakt_telemetry::MetricsRecorder;

use crate::gauge::GaugeRenderer;
use crate::report::SimulationReport;

/// Result of one tick, in the order the stages ran.
#[derive(Debug, Clone)]
pub struct TickOutcome {
    pub sample: FlowSample,
    pub totals: UsageTotals,
    pub status: AlertStatus,
    pub crossed: Vec<MilestoneCrossing>,
}

/// Coordinates the water monitoring pipeline.
///
/// Owns all mutable state: the simulator (and through it the totals), the
/// milestone bookkeeping, and the previous alert flag used to log and count
/// transitions. Nothing here is shared across threads; ticks run strictly
/// one after another.
pub struct WaterRuntime {
    config: VattenvaktConfig,
    simulator: Simulator,
    evaluator: AlertEvaluator,
    milestones: MilestoneTracker,
    renderer: Box<dyn GaugeRenderer + Send>,
    metrics: MetricsRecorder,
    clock: SimClock,
    alert_active: bool,
    alert_ticks: u64,
}

impl WaterRuntime {
    pub fn new(config: VattenvaktConfig, renderer: Box<dyn GaugeRenderer + Send>) -> Self {
        info!(
            seed = config.simulator.seed,
            tick_interval_ms = config.runtime.tick_interval_ms,
            allowed_limit = config.monitor.thresholds.allowed_limit,
            "initializing water runtime"
        );

        let simulator = Simulator::from_config(&config.simulator);
        let evaluator = AlertEvaluator::new(config.monitor.thresholds.clone());
        let milestones = MilestoneTracker::new(
            config.monitor.thresholds.allowed_limit,
            &config.monitor.milestones,
        );

        Self {
            config,
            simulator,
            evaluator,
            milestones,
            renderer,
            metrics: MetricsRecorder::new(),
            clock: SimClock::new(),
            alert_active: false,
            alert_ticks: 0,
        }
    }

    pub fn metrics(&self) -> &MetricsRecorder {
        &self.metrics
    }

    /// Runs one full tick: simulate, evaluate, check milestones, render,
    /// then record metrics and alert transitions.
    pub fn tick(&mut self) -> TickOutcome {
        let sample = self.simulator.tick();
        let totals = *self.simulator.totals();

        let status = self.evaluator.evaluate(&totals);
        let crossed = self.milestones.check(totals.home_litres);

        self.renderer
            .render(&totals, self.config.monitor.thresholds.allowed_limit);

        self.clock.advance_ms(self.config.runtime.tick_interval_ms);
        self.record(&sample, &totals, &status, &crossed);

        TickOutcome {
            sample,
            totals,
            status,
            crossed,
        }
    }

    fn record(
        &mut self,
        sample: &FlowSample,
        totals: &UsageTotals,
        status: &AlertStatus,
        crossed: &[MilestoneCrossing],
    ) {
        self.metrics.ticks.inc();
        self.metrics
            .tank_litres
            .inc_by(u64::from(sample.tank_increment));
        self.metrics
            .home_litres
            .inc_by(u64::from(sample.home_increment));
        self.metrics.leakage_litres.set(totals.leakage_litres());

        debug!(
            tank = totals.tank_litres,
            home = totals.home_litres,
            leakage = totals.leakage_litres(),
            "tick complete"
        );

        for crossing in crossed {
            self.metrics.milestones.inc();
            warn!(
                percent = crossing.percent,
                home_litres = crossing.home_litres,
                limit = self.config.monitor.thresholds.allowed_limit,
                "usage milestone crossed"
            );
        }

        match (self.alert_active, status.is_active()) {
            (false, true) => {
                self.metrics.alerts.inc();
                warn!(?status, "alert raised");
            }
            (true, false) => info!("alert cleared"),
            _ => {}
        }
        self.alert_active = status.is_active();
        if self.alert_active {
            self.alert_ticks += 1;
        }
    }

    /// Timer-driven loop at the configured period. Ticks never overlap, and
    /// a paused host resumes on the next period with no catch-up burst.
    pub async fn run(&mut self, max_ticks: Option<u64>) {
        let mut timer = interval(self.config.runtime.tick_interval());
        timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let mut executed = 0u64;
        loop {
            timer.tick().await;
            self.tick();
            executed += 1;
            if matches!(max_ticks, Some(max) if executed >= max) {
                break;
            }
        }
        info!(ticks = executed, "run complete");
    }

    /// Fast deterministic run: no sleeping, the simulated clock advances one
    /// nominal period per tick.
    pub fn run_simulation(&mut self, ticks: u64) -> SimulationReport {
        let mut final_status = AlertStatus::Clear;
        for _ in 0..ticks {
            final_status = self.tick().status;
        }

        let totals = *self.simulator.totals();
        SimulationReport {
            seed: self.config.simulator.seed,
            ticks: self.simulator.ticks(),
            simulated_ms: self.clock.elapsed_ms(),
            tank_litres: totals.tank_litres,
            home_litres: totals.home_litres,
            leakage_litres: totals.leakage_litres(),
            alert_ticks: self.alert_ticks,
            supply_loss_ticks: self.simulator.supply_loss_ticks(),
            final_status,
            state_hash: self.simulator.state_hash(),
            generated_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gauge::NullGauge;
    use std::sync::{Arc, Mutex};

    /// Captures every render call so tests can assert on the sequence the
    /// runtime drives.
    struct RecordingGauge {
        calls: Arc<Mutex<Vec<(u64, u64)>>>,
    }

    impl GaugeRenderer for RecordingGauge {
        fn render(&mut self, totals: &UsageTotals, max_litres: u64) {
            self.calls
                .lock()
                .unwrap()
                .push((totals.home_litres, max_litres));
        }
    }

    fn config() -> VattenvaktConfig {
        VattenvaktConfig::default()
    }

    #[test]
    fn renderer_sees_every_tick_with_the_allowed_limit() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let gauge = RecordingGauge {
            calls: calls.clone(),
        };
        let mut runtime = WaterRuntime::new(config(), Box::new(gauge));

        let first = runtime.tick();
        runtime.tick();

        let calls = calls.lock().unwrap();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0], (first.totals.home_litres, 100));
    }

    #[test]
    fn totals_in_outcome_match_the_applied_sample() {
        let mut runtime = WaterRuntime::new(config(), Box::new(NullGauge));
        let outcome = runtime.tick();
        assert_eq!(
            outcome.totals.tank_litres,
            u64::from(outcome.sample.tank_increment)
        );
        assert!(outcome.totals.home_litres <= outcome.totals.tank_litres);
    }

    #[test]
    fn simulation_run_is_reproducible() {
        let mut a = WaterRuntime::new(config(), Box::new(NullGauge));
        let mut b = WaterRuntime::new(config(), Box::new(NullGauge));
        let report_a = a.run_simulation(1000);
        let report_b = b.run_simulation(1000);

        assert_eq!(report_a.state_hash, report_b.state_hash);
        assert_eq!(report_a.tank_litres, report_b.tank_litres);
        assert_eq!(report_a.home_litres, report_b.home_litres);
        assert_eq!(report_a.simulated_ms, 1000 * 2000);
    }

    #[test]
    fn invariant_and_leakage_accounting_over_a_long_run() {
        let mut runtime = WaterRuntime::new(config(), Box::new(NullGauge));
        let report = runtime.run_simulation(10_000);

        assert!(report.home_litres <= report.tank_litres);
        assert_eq!(
            report.leakage_litres,
            report.tank_litres as i64 - report.home_litres as i64
        );
        // ~10% of ticks lose their supply; leakage accumulates, so over a
        // long run the alert condition is bound to hold at some point.
        assert!(report.supply_loss_ticks > 0);
        assert!(report.alert_ticks > 0);
    }

    #[test]
    fn metrics_track_the_totals() {
        let mut runtime = WaterRuntime::new(config(), Box::new(NullGauge));
        runtime.run_simulation(50);
        let totals = *runtime.simulator.totals();
        assert_eq!(runtime.metrics().ticks.get(), 50);
        assert_eq!(runtime.metrics().tank_litres.get(), totals.tank_litres);
        assert_eq!(runtime.metrics().home_litres.get(), totals.home_litres);
    }

    #[tokio::test(start_paused = true)]
    async fn timer_loop_stops_at_max_ticks() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let gauge = RecordingGauge {
            calls: calls.clone(),
        };
        let mut runtime = WaterRuntime::new(config(), Box::new(gauge));
        runtime.run(Some(3)).await;
        assert_eq!(calls.lock().unwrap().len(), 3);
    }
}
