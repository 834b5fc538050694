//! Structured validation results.

use serde::Serialize;

/// The outcome of validating an unnormalized configuration.
///
/// Lists every violated rule in the order the checks ran.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ValidationOutcome {
    /// True when `errors` is empty.
    pub valid: bool,
    /// Human-readable reasons, one per violated rule.
    pub errors: Vec<String>,
}

impl ValidationOutcome {
    /// Builds an outcome from collected errors.
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }
}

/// Checks that `value` is a whole number inside `[min, max]`.
///
/// Pushes one message per failed property onto `errors`.
pub(crate) fn check_whole_in_range(
    errors: &mut Vec<String>,
    field: &str,
    value: f64,
    min: usize,
    max: usize,
) {
    if !value.is_finite() || value.fract() != 0.0 {
        errors.push(format!("{field} must be a whole number"));
    }
    if !(min as f64..=max as f64).contains(&value) {
        errors.push(format!("{field} must be between {min} and {max}"));
    }
}

/// Rounds half away from zero and clamps into `[min, max]`.
///
/// NaN resolves to `default`.
pub(crate) fn round_and_clamp(value: f64, min: usize, max: usize, default: usize) -> usize {
    if value.is_nan() {
        return default;
    }
    value.round().clamp(min as f64, max as f64) as usize
}
