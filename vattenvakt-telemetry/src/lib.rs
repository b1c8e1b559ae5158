//! ## vattenvakt-telemetry
//! **Structured logging and Prometheus metrics**
//!
//! ### Components:
//! - `logging/`: tracing-subscriber initialization with `EnvFilter`
//! - `metrics/`: Prometheus registry for tick, litre, and alert counters

pub mod logging;
pub mod metrics;

pub use logging::EventLogger;
pub use metrics::MetricsRecorder;
