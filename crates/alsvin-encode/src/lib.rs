//! `alsvin-encode` — classical → quantum linear-system encoding.
//!
//! Prepares a classical system `A·x = b` for a quantum linear-system
//! solver:
//!
//! - **Hermitian embedding**: promote a general square system into a
//!   Hermitian, power-of-two-dimensioned one, with a [`RecoveryMap`] back
//!   to the original solution space.
//! - **Fixed-point quantization**: real values into sign-wrapped unsigned
//!   codes at a chosen binary scale ([`FixedPoint`]).
//! - **Amplitude trees**: quantized vectors into flattened binary
//!   sum-trees for QRAM-style state preparation ([`AmplitudeTree`]).
//! - **Step scheduling**: an even iteration count from a condition-number
//!   estimate ([`compute_steps`]).
//!
//! Everything here is a pure value transform; handing the results to an
//! actual engine is the job of `alsvin-solve` and the `alsvin-hal`
//! boundary.
//!
//! # Quick start
//!
//! ```rust
//! use alsvin_encode::{AmplitudeTree, FixedPoint, embed};
//! use ndarray::array;
//!
//! let a = array![[1.0, 2.0], [2.0, 1.0]];
//! let b = array![1.0, 0.5];
//! let sys = embed(&a, &b).unwrap();
//! assert_eq!(sys.recovery.padded_dim(), 2);
//! assert!(!sys.recovery.was_embedded());
//!
//! let fp = FixedPoint::new(15, 50).unwrap();
//! let codes = fp.encode_all(&sys.rhs.to_vec());
//! let tree = AmplitudeTree::build(&codes);
//! assert_eq!(tree.nodes().last(), Some(&0));
//! ```

pub mod embed;
pub mod error;
pub mod fixed;
pub mod schedule;
pub mod tree;

pub use embed::{HermitianSystem, RecoveryMap, embed};
pub use error::{EncodeError, EncodeResult};
pub use fixed::{FixedPoint, QuantizedVector, magnitude};
pub use schedule::{STEP_CONSTANT, compute_steps};
pub use tree::AmplitudeTree;
