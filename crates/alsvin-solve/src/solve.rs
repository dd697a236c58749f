//! The solve pipeline.
//!
//! Sequences the encoding core and fans its outputs into the engine
//! boundary:
//!
//! ```text
//!   embed ─→ quantize (matrix, rhs) ─→ amplitude trees ─→ QRAMs
//!                                          └─→ registers ─→ state prep
//! ```
//!
//! The pipeline currently stops once the right-hand-side state has been
//! prepared. The matrix QRAM and the step count are produced and handed
//! over, but the evolution / phase-estimation stage that would consume
//! them is an unimplemented extension point on the engine side, so the
//! returned solution vector is empty.

use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use alsvin_encode::{AmplitudeTree, FixedPoint, RecoveryMap, compute_steps, embed};
use alsvin_hal::{QramSpec, QuantumEngine, StorageKind};

use crate::error::SolveResult;
use crate::scope::RegisterScope;

/// Tunable inputs to [`solve`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolveOptions {
    /// Condition-number estimate; `None` or zero asks the engine for
    /// one. A supplied negative or non-finite value is rejected by the
    /// scheduler with `InvalidParameter`.
    pub kappa: Option<f64>,
    /// Precision knob reserved for the evolution stage; carried through
    /// so caller signatures stay stable when that stage lands.
    pub p: f64,
    /// Step rate fed to the scheduler.
    pub step_rate: f64,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self {
            kappa: None,
            p: 1.3,
            step_rate: 0.1,
        }
    }
}

/// Fixed encoding parameters for the engine's register file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodingParams {
    /// Bits per stored data value.
    pub data_width: u32,
    /// Bits of fractional precision inside the engine's register
    /// semantics.
    pub rational_width: u32,
    /// Binary scale exponent for quantization.
    pub scale_exponent: i32,
}

impl Default for EncodingParams {
    fn default() -> Self {
        Self {
            data_width: 50,
            rational_width: 51,
            scale_exponent: 15,
        }
    }
}

/// Outcome of a [`solve`] call.
#[derive(Debug, Clone)]
pub struct Solution {
    /// The solved vector in the original space. Empty until the
    /// evolution stage exists.
    pub solution: Array1<f64>,
    /// Mapping from embedded-space vectors back to the original space.
    pub recovery: RecoveryMap,
    /// Scheduled iteration count (always even).
    pub steps: u64,
}

/// Run the pipeline with the default [`EncodingParams`].
pub fn solve<E: QuantumEngine>(
    engine: &mut E,
    a: &Array2<f64>,
    b: &Array1<f64>,
    opts: &SolveOptions,
) -> SolveResult<Solution> {
    solve_with_params(engine, a, b, opts, &EncodingParams::default())
}

/// Run the pipeline with explicit encoding parameters.
///
/// Embeds and pads the system, schedules the iteration count, quantizes
/// the matrix (column-major) and the right-hand side, and builds one
/// amplitude tree per array. QRAM construction, register allocation and
/// right-hand-side state preparation all run inside a [`RegisterScope`],
/// which clears the engine namespace on every exit path.
pub fn solve_with_params<E: QuantumEngine>(
    engine: &mut E,
    a: &Array2<f64>,
    b: &Array1<f64>,
    opts: &SolveOptions,
    params: &EncodingParams,
) -> SolveResult<Solution> {
    let system = embed(a, b)?;
    let n = system.recovery.padded_dim();

    // Only an absent or zero kappa asks the engine; a supplied negative
    // or non-finite value is a caller mistake and must surface from the
    // scheduler, not be silently replaced.
    let kappa = match opts.kappa {
        Some(k) if k != 0.0 => k,
        _ => engine.estimate_condition_number(a)?,
    };
    let steps = compute_steps(opts.step_rate, kappa)?;
    info!(kappa, steps, dim = n, "pipeline parameters fixed");

    let fp = FixedPoint::new(params.scale_exponent, params.data_width)?;

    // Column-major flattening, matching the engine's address convention.
    let flat_a: Vec<f64> = system.matrix.t().iter().copied().collect();
    let conv_a = fp.encode_all(&flat_a);
    let conv_b = fp.encode_all(&system.rhs.to_vec());
    let tree_a = AmplitudeTree::build(&conv_a);
    let tree_b = AmplitudeTree::build(&conv_b);

    // Address widths: matrix entries need a doubled index plus a pairing
    // bit; the vector needs a single index plus the pairing bit.
    let log_dim = n.ilog2();

    // Every engine mutation from here on happens inside the scope, so a
    // failure at any point still clears the shared namespace.
    let mut scope = RegisterScope::new(engine);

    // The matrix QRAM is built and handed to the engine but not yet
    // consumed: evolution and phase estimation are an extension point on
    // the engine side.
    let _matrix_qram = scope.engine().build_qram(
        &QramSpec {
            address_width: 2 * log_dim + 1,
            data_width: params.data_width,
        },
        tree_a.nodes(),
    )?;
    let qram_b = scope.engine().build_qram(
        &QramSpec {
            address_width: log_dim + 1,
            data_width: params.data_width,
        },
        tree_b.nodes(),
    )?;
    debug!(matrix_nodes = tree_a.len(), rhs_nodes = tree_b.len(), "qrams built");

    scope.add("main_reg", StorageKind::UnsignedInteger, log_dim)?;
    scope.add("anc_ua", StorageKind::UnsignedInteger, log_dim)?;
    scope.add("anc_4", StorageKind::Boolean, 1)?;
    scope.add("anc_3", StorageKind::Boolean, 1)?;
    scope.add("anc_2", StorageKind::Boolean, 1)?;
    scope.add("anc_1", StorageKind::Boolean, 1)?;

    scope
        .engine()
        .prepare_state(&qram_b, "main_reg", params.data_width, params.rational_width)?;
    info!("right-hand-side state prepared");

    Ok(Solution {
        solution: Array1::zeros(0),
        recovery: system.recovery,
        steps,
    })
}
