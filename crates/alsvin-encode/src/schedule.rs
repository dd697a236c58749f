//! Iteration-count scheduling from a condition-number estimate.

use tracing::debug;

use crate::error::{EncodeError, EncodeResult};

/// Calibration constant tying the step rate to the phase-estimation
/// precision of the downstream solver.
pub const STEP_CONSTANT: f64 = 2305.0;

/// Number of solver iterations for a given step rate and condition number.
///
/// `floor(step_rate · STEP_CONSTANT · kappa)`, bumped to the next even
/// number. The result is always non-negative and even, and non-decreasing
/// in `kappa` for a fixed `step_rate`.
pub fn compute_steps(step_rate: f64, kappa: f64) -> EncodeResult<u64> {
    if step_rate <= 0.0 || !step_rate.is_finite() {
        return Err(EncodeError::InvalidParameter {
            name: "step_rate",
            value: step_rate,
        });
    }
    if kappa <= 0.0 || !kappa.is_finite() {
        return Err(EncodeError::InvalidParameter {
            name: "kappa",
            value: kappa,
        });
    }

    let mut steps = (step_rate * STEP_CONSTANT * kappa).floor() as u64;
    if steps % 2 != 0 {
        steps += 1;
    }
    debug!(step_rate, kappa, steps, "computed step count");
    Ok(steps)
}
