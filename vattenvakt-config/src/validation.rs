//! Custom validation functions shared across configuration modules.

use validator::ValidationError;

/// Validate a tracing level name.
pub fn validate_log_level(level: &str) -> Result<(), ValidationError> {
    let valid = ["trace", "debug", "info", "warn", "error"]
        .contains(&level.to_lowercase().as_str());
    if valid {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_log_level"))
    }
}

/// Validate a usage-milestone list: non-empty percentages in 1..=100,
/// strictly ascending so each crossing fires in order and at most once.
pub fn validate_milestones(milestones: &[u8]) -> Result<(), ValidationError> {
    if milestones.is_empty() {
        return Err(ValidationError::new("empty_milestones"));
    }
    if milestones.iter().any(|&p| p == 0 || p > 100) {
        return Err(ValidationError::new("milestone_out_of_range"));
    }
    if milestones.windows(2).any(|w| w[0] >= w[1]) {
        return Err(ValidationError::new("milestones_not_ascending"));
    }
    Ok(())
}
