//! One-norm condition-number estimation.

use alsvin_hal::{HalError, HalResult};
use ndarray::Array2;

/// Pivots smaller than this are treated as zero during elimination.
const PIVOT_TOL: f64 = 1e-12;

/// Estimate κ₁(A) = ‖A‖₁ · ‖A⁻¹‖₁ by explicit Gauss-Jordan inversion with
/// partial pivoting.
///
/// Adequate for the system sizes this engine sees; a production engine
/// would use a norm estimator that never forms the inverse.
pub fn condest_1norm(a: &Array2<f64>) -> HalResult<f64> {
    let (rows, cols) = a.dim();
    if rows != cols {
        return Err(HalError::Engine(format!(
            "condition estimate needs a square matrix, got {rows}×{cols}"
        )));
    }
    if rows == 0 {
        return Err(HalError::Engine("condition estimate of an empty matrix".into()));
    }
    let inv = invert(a)
        .ok_or_else(|| HalError::Engine("matrix is singular to working precision".into()))?;
    Ok(one_norm(a) * one_norm(&inv))
}

/// Maximum absolute column sum.
fn one_norm(a: &Array2<f64>) -> f64 {
    let (rows, cols) = a.dim();
    (0..cols)
        .map(|j| (0..rows).map(|i| a[[i, j]].abs()).sum::<f64>())
        .fold(0.0, f64::max)
}

/// Gauss-Jordan inversion; `None` if a pivot falls below [`PIVOT_TOL`].
fn invert(a: &Array2<f64>) -> Option<Array2<f64>> {
    let n = a.nrows();
    let mut m = a.clone();
    let mut inv = Array2::<f64>::eye(n);

    for col in 0..n {
        let mut pivot = col;
        for r in (col + 1)..n {
            if m[[r, col]].abs() > m[[pivot, col]].abs() {
                pivot = r;
            }
        }
        if m[[pivot, col]].abs() < PIVOT_TOL {
            return None;
        }
        if pivot != col {
            for j in 0..n {
                m.swap([pivot, j], [col, j]);
                inv.swap([pivot, j], [col, j]);
            }
        }

        let d = m[[col, col]];
        for j in 0..n {
            m[[col, j]] /= d;
            inv[[col, j]] /= d;
        }
        for r in 0..n {
            if r == col {
                continue;
            }
            let f = m[[r, col]];
            if f == 0.0 {
                continue;
            }
            for j in 0..n {
                m[[r, j]] -= f * m[[col, j]];
                inv[[r, j]] -= f * inv[[col, j]];
            }
        }
    }
    Some(inv)
}
