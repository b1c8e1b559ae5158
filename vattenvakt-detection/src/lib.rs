//! ## vattenvakt-detection
//! **Threshold evaluation over cumulative flow totals**
//!
//! ### Components:
//! - `evaluator/`: Pure alert decision from totals and thresholds
//! - `milestones/`: One-shot usage-crossing notifications
//!
//! Neither component performs I/O; the engine decides what to do with the
//! results (log, count, render).

pub mod evaluator;
pub mod milestones;

pub use evaluator::{AlertCause, AlertEvaluator, AlertStatus};
pub use milestones::{MilestoneCrossing, MilestoneTracker};
