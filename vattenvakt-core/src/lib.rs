//! ## vattenvakt-core
//! **Shared domain types for the water monitoring pipeline**
//!
//! ### Key Submodules:
//! - `totals/`: Cumulative litre counters with the `home <= tank` invariant
//! - `time/`: `SimClock` for fast-forward simulation runs
//!
//! Everything here is plain data: no I/O, no randomness, no scheduling.
//! The simulator is the only writer of [`UsageTotals`]; the evaluator and
//! renderer only read them.

pub mod time;
pub mod totals;

pub use time::SimClock;
pub use totals::{FlowSample, UsageTotals};
