//! The engine boundary trait.
//!
//! The encoding pipeline is a pure in-memory transform; everything that
//! actually holds quantum state lives behind [`QuantumEngine`]:
//!
//! ```text
//!   estimate_condition_number()      (read-only numeric collaborator)
//!   build_qram() ──→ add_register()* ──→ prepare_state() ──→ clear()
//! ```
//!
//! ## Design principles
//!
//! - **Synchronous**: no method performs I/O; engines are local libraries,
//!   not services.
//! - **Shared namespace**: register names are unique across the whole
//!   engine, not per call. `clear()` resets that namespace; callers that
//!   add registers own the teardown.
//! - **Caller-matched widths**: a QRAM's address and data widths must
//!   match the tree they index. The boundary mandates no validation of
//!   its own; an engine may still check.

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::error::HalResult;

/// Storage kind for a named quantum register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StorageKind {
    /// Unsigned binary integer register.
    UnsignedInteger,
    /// Single-bit flag register.
    Boolean,
}

/// Addressing parameters for a QRAM structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QramSpec {
    /// Bits of address space.
    pub address_width: u32,
    /// Bits per stored value.
    pub data_width: u32,
}

/// A quantum simulation engine as seen by the encoding pipeline.
///
/// This trait covers exactly the capabilities the pipeline consumes and
/// nothing more; time evolution and phase estimation live entirely on the
/// engine side of the boundary.
pub trait QuantumEngine {
    /// Engine-specific QRAM handle.
    type Qram;

    /// Estimate the condition number κ(A).
    ///
    /// Any positive finite value is a valid estimate.
    fn estimate_condition_number(&self, a: &Array2<f64>) -> HalResult<f64>;

    /// Construct an addressable structure over a flattened amplitude tree.
    fn build_qram(&mut self, spec: &QramSpec, tree: &[u64]) -> HalResult<Self::Qram>;

    /// Add a named register of the given kind and width.
    ///
    /// Fails if the name is already taken in the engine namespace.
    fn add_register(&mut self, name: &str, kind: StorageKind, width: u32) -> HalResult<()>;

    /// Run state preparation: load the QRAM's leaf distribution into the
    /// target register's amplitudes.
    ///
    /// `rational_width` is the engine's fractional-precision sub-field of
    /// the fixed-point register format.
    fn prepare_state(
        &mut self,
        qram: &Self::Qram,
        target: &str,
        data_width: u32,
        rational_width: u32,
    ) -> HalResult<()>;

    /// Drop every register and QRAM added so far.
    fn clear(&mut self);
}
