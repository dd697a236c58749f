//! Tests for the one-norm condition estimator.

use alsvin_adapter_sim::condest_1norm;
use ndarray::{Array2, array};

#[test]
fn identity_has_condition_one() {
    let kappa = condest_1norm(&Array2::<f64>::eye(4)).unwrap();
    assert!((kappa - 1.0).abs() < 1e-12);
}

#[test]
fn diagonal_matrix_gives_ratio_of_extremes() {
    let a = array![[1.0, 0.0], [0.0, 10.0]];
    // ‖A‖₁ = 10, ‖A⁻¹‖₁ = 1.
    let kappa = condest_1norm(&a).unwrap();
    assert!((kappa - 10.0).abs() < 1e-10);
}

#[test]
fn known_two_by_two() {
    // A = [[1, 2], [3, 4]]: ‖A‖₁ = 6, A⁻¹ = [[-2, 1], [1.5, -0.5]],
    // ‖A⁻¹‖₁ = 3.5, so κ₁ = 21.
    let a = array![[1.0, 2.0], [3.0, 4.0]];
    let kappa = condest_1norm(&a).unwrap();
    assert!((kappa - 21.0).abs() < 1e-9);
}

#[test]
fn singular_matrix_is_reported() {
    let a = array![[1.0, 2.0], [2.0, 4.0]];
    assert!(condest_1norm(&a).is_err());
}

#[test]
fn non_square_input_is_rejected() {
    let a = Array2::<f64>::zeros((2, 3));
    assert!(condest_1norm(&a).is_err());
}

#[test]
fn pivoting_handles_zero_leading_entry() {
    let a = array![[0.0, 1.0], [1.0, 0.0]];
    // Permutation matrix: perfectly conditioned.
    let kappa = condest_1norm(&a).unwrap();
    assert!((kappa - 1.0).abs() < 1e-12);
}
