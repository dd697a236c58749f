//! Tests for step-count scheduling.

use alsvin_encode::{EncodeError, STEP_CONSTANT, compute_steps};
use proptest::prelude::*;

#[test]
fn odd_products_round_up_to_even() {
    // 0.1 · 2305 · 10 = 2305 → odd → 2306.
    assert_eq!(compute_steps(0.1, 10.0).unwrap(), 2306);
}

#[test]
fn even_products_stay_put() {
    // 2 · 2305 · 1 = 4610, already even.
    assert_eq!(compute_steps(2.0, 1.0).unwrap(), 4610);
}

#[test]
fn fractional_products_floor_first() {
    // 0.001 · 2305 · 1 = 2.305 → 2.
    assert_eq!(compute_steps(0.001, 1.0).unwrap(), 2);
}

#[test]
fn constant_is_pinned() {
    assert_eq!(STEP_CONSTANT, 2305.0);
}

#[test]
fn rejects_non_positive_parameters() {
    assert!(matches!(
        compute_steps(0.0, 1.0),
        Err(EncodeError::InvalidParameter {
            name: "step_rate",
            ..
        })
    ));
    assert!(matches!(
        compute_steps(0.1, -3.0),
        Err(EncodeError::InvalidParameter { name: "kappa", .. })
    ));
    assert!(matches!(
        compute_steps(0.1, f64::NAN),
        Err(EncodeError::InvalidParameter { name: "kappa", .. })
    ));
    assert!(compute_steps(0.1, f64::INFINITY).is_err());
}

proptest! {
    /// Always even for positive finite inputs.
    #[test]
    fn steps_are_even(rate in 1e-3f64..10.0, kappa in 1e-3f64..1e4) {
        let steps = compute_steps(rate, kappa).unwrap();
        prop_assert_eq!(steps % 2, 0);
    }

    /// Non-decreasing in kappa for a fixed rate.
    #[test]
    fn monotone_in_kappa(rate in 1e-3f64..10.0, kappa in 1e-3f64..1e4, bump in 0.0f64..100.0) {
        let lo = compute_steps(rate, kappa).unwrap();
        let hi = compute_steps(rate, kappa + bump).unwrap();
        prop_assert!(hi >= lo);
    }
}
