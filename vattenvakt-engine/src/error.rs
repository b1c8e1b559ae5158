//! Engine error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    /// A deterministic run did not reproduce the expected sample sequence.
    #[error("state hash mismatch\nexpected: {expected}\nactual:   {actual}")]
    HashMismatch { expected: String, actual: String },
}
