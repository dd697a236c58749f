//! `alsvin-solve` — solve orchestration.
//!
//! Drives a classical linear system `A·x = b` through the encoding core
//! and across the engine boundary: Hermitian embedding, fixed-point
//! quantization, amplitude-tree construction, QRAM and register setup,
//! and right-hand-side state preparation. The register namespace is
//! scoped per call so independent solves never collide.
//!
//! # Example
//!
//! ```ignore
//! use alsvin_adapter_sim::SimEngine;
//! use alsvin_solve::{SolveOptions, solve};
//! use ndarray::array;
//!
//! let a = array![[1.0, 2.0], [2.0, 1.0]];
//! let b = array![1.0, 0.5];
//! let mut engine = SimEngine::new();
//! let outcome = solve(&mut engine, &a, &b, &SolveOptions::default())?;
//! assert_eq!(outcome.steps % 2, 0);
//! ```

pub mod error;
pub mod scope;
pub mod solve;

pub use error::{SolveError, SolveResult};
pub use scope::RegisterScope;
pub use solve::{EncodingParams, Solution, SolveOptions, solve, solve_with_params};
