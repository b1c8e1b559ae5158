//! ## vattenvakt-engine
//! **Tick orchestration for the water monitoring pipeline**
//!
//! Owns the per-tick sequence the rest of the workspace plugs into:
//! simulator, then evaluator, then milestone tracker, then gauge renderer,
//! with metrics and logging on the way out. Ticks are strictly sequential;
//! the async loop awaits each one to completion before the next fires.

mod error;
mod gauge;
mod report;
mod runtime;

pub use self::{
    error::EngineError,
    gauge::{GaugeRenderer, NullGauge, TerminalGauge},
    report::SimulationReport,
    runtime::{TickOutcome, WaterRuntime},
};
