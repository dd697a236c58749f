//! Hermitian embedding and power-of-two padding.
//!
//! A quantum linear-system solver accepts `A·x = b` only when `A` is
//! Hermitian and its dimension is a power of two. A general square system
//! is lifted into the block system
//!
//! ```text
//!   [ 0    A ] [y]   [b]
//!   [ A^T  0 ] [z] = [0]
//! ```
//!
//! whose solution has `y = 0` and `z = x`, at the cost of doubling the
//! dimension. The hermitized system is then planted in the top-left corner
//! of an identity matrix of the next power-of-two size, so every padding
//! row reads `1·x_i = 0` and stays inert.

use ndarray::{Array1, Array2, s};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{EncodeError, EncodeResult};

/// Absolute tolerance for the symmetry check.
const HERMITIAN_TOL: f64 = 1e-10;

/// Maps a solved vector in the embedded/padded space back to the original
/// solution space.
///
/// An explicit value type rather than a closure: the captured dimensions
/// fully determine the mapping, so it can be stored, serialized and tested
/// independently of the embedding call that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecoveryMap {
    original_dim: usize,
    herm_dim: usize,
    padded_dim: usize,
    was_embedded: bool,
}

impl RecoveryMap {
    /// Dimension of the system before any transformation.
    pub fn original_dim(&self) -> usize {
        self.original_dim
    }

    /// Dimension after hermitization (equal to `original_dim`, or double it).
    pub fn herm_dim(&self) -> usize {
        self.herm_dim
    }

    /// Smallest power of two ≥ `herm_dim`.
    pub fn padded_dim(&self) -> usize {
        self.padded_dim
    }

    /// True if the block embedding was applied.
    pub fn was_embedded(&self) -> bool {
        self.was_embedded
    }

    /// Map `x` (which must have length `padded_dim`) back to the original
    /// solution space.
    ///
    /// Strips the padding first, then undoes the block embedding: the true
    /// answer of the doubled system sits in the second half of its `[y; z]`
    /// solution, so that half is returned. Without embedding the stripped
    /// vector is the answer itself.
    pub fn recover(&self, x: &Array1<f64>) -> EncodeResult<Array1<f64>> {
        if x.len() != self.padded_dim {
            return Err(EncodeError::RecoveryDimension {
                expected: self.padded_dim,
                got: x.len(),
            });
        }
        let x_herm = x.slice(s![..self.herm_dim]);
        if self.was_embedded {
            if x_herm.len() != 2 * self.original_dim {
                return Err(EncodeError::RecoveryDimension {
                    expected: 2 * self.original_dim,
                    got: x_herm.len(),
                });
            }
            Ok(x_herm.slice(s![self.original_dim..]).to_owned())
        } else {
            if x_herm.len() != self.original_dim {
                return Err(EncodeError::RecoveryDimension {
                    expected: self.original_dim,
                    got: x_herm.len(),
                });
            }
            Ok(x_herm.to_owned())
        }
    }
}

/// A Hermitian, power-of-two-dimensioned system plus its recovery map.
#[derive(Debug, Clone)]
pub struct HermitianSystem {
    /// The transformed matrix.
    pub matrix: Array2<f64>,
    /// The matching right-hand-side vector.
    pub rhs: Array1<f64>,
    /// Mapping from solved vectors back to the original space.
    pub recovery: RecoveryMap,
}

/// Promote `A·x = b` into a Hermitian, power-of-two-dimensioned system.
///
/// An already-Hermitian input passes through untouched (aside from any
/// padding); otherwise the block embedding doubles the dimension. The
/// returned [`RecoveryMap`] undoes both steps.
///
/// Rank-deficient input is accepted: only shape and size mismatches fail.
pub fn embed(a: &Array2<f64>, b: &Array1<f64>) -> EncodeResult<HermitianSystem> {
    let (rows, cols) = a.dim();
    if rows != cols {
        return Err(EncodeError::NotSquare { rows, cols });
    }
    if rows != b.len() {
        return Err(EncodeError::DimensionMismatch {
            matrix_dim: rows,
            vector_len: b.len(),
        });
    }

    let original_dim = rows;

    // Step 1: lift into a Hermitian system if necessary.
    let (a_herm, b_herm, was_embedded) = if is_hermitian(a) {
        debug!(dim = original_dim, "input already Hermitian");
        (a.clone(), b.clone(), false)
    } else {
        debug!(dim = original_dim, "applying block embedding");
        let n = original_dim;
        let mut m = Array2::zeros((2 * n, 2 * n));
        m.slice_mut(s![..n, n..]).assign(a);
        m.slice_mut(s![n.., ..n]).assign(&a.t());
        let mut v = Array1::zeros(2 * n);
        v.slice_mut(s![..n]).assign(b);
        (m, v, true)
    };

    // Step 2: pad with inert unit equations up to the next power of two.
    let herm_dim = a_herm.nrows();
    let padded_dim = herm_dim.next_power_of_two();
    let (matrix, rhs) = if padded_dim == herm_dim {
        (a_herm, b_herm)
    } else {
        debug!(from = herm_dim, to = padded_dim, "padding to power of two");
        let mut m = Array2::eye(padded_dim);
        m.slice_mut(s![..herm_dim, ..herm_dim]).assign(&a_herm);
        let mut v = Array1::zeros(padded_dim);
        v.slice_mut(s![..herm_dim]).assign(&b_herm);
        (m, v)
    };

    Ok(HermitianSystem {
        matrix,
        rhs,
        recovery: RecoveryMap {
            original_dim,
            herm_dim,
            padded_dim,
            was_embedded,
        },
    })
}

/// True if `a` equals its transpose within [`HERMITIAN_TOL`].
///
/// Real data, so the conjugate transpose reduces to the transpose.
fn is_hermitian(a: &Array2<f64>) -> bool {
    let n = a.nrows();
    for i in 0..n {
        for j in (i + 1)..n {
            if (a[[i, j]] - a[[j, i]]).abs() > HERMITIAN_TOL {
                return false;
            }
        }
    }
    true
}
