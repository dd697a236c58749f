//! In-memory reference engine.
//!
//! `SimEngine` is a stand-in for a real quantum engine: it tracks
//! registers and QRAMs, and realizes state preparation at the amplitude
//! level by reading the leaf block out of the flattened tree. It applies
//! no gates and keeps no phases — enough behavior to exercise the whole
//! pipeline end to end, nothing more.

use alsvin_encode::magnitude;
use alsvin_hal::{HalError, HalResult, QramSpec, QuantumEngine, StorageKind};
use ndarray::Array2;
use num_complex::Complex64;
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::condest::condest_1norm;

/// A register as tracked by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisterInfo {
    /// Declared storage kind.
    pub kind: StorageKind,
    /// Width in bits.
    pub width: u32,
}

/// Opaque QRAM handle issued by [`SimEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QramId(u64);

#[derive(Debug, Clone)]
struct QramEntry {
    spec: QramSpec,
    nodes: Vec<u64>,
}

/// The in-memory reference engine.
#[derive(Debug, Default)]
pub struct SimEngine {
    registers: FxHashMap<String, RegisterInfo>,
    qrams: Vec<QramEntry>,
    amplitudes: FxHashMap<String, Vec<Complex64>>,
}

impl SimEngine {
    /// Create an empty engine.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a register by name.
    pub fn register(&self, name: &str) -> Option<&RegisterInfo> {
        self.registers.get(name)
    }

    /// Number of registers currently in the namespace.
    pub fn num_registers(&self) -> usize {
        self.registers.len()
    }

    /// Number of QRAMs currently held.
    pub fn num_qrams(&self) -> usize {
        self.qrams.len()
    }

    /// Amplitudes written into a register by `prepare_state`, if any.
    ///
    /// Signs and phases are not reconstructed: preparation is driven by
    /// magnitudes, so every amplitude is real and non-negative.
    pub fn amplitudes(&self, name: &str) -> Option<&[Complex64]> {
        self.amplitudes.get(name).map(Vec::as_slice)
    }
}

impl QuantumEngine for SimEngine {
    type Qram = QramId;

    fn estimate_condition_number(&self, a: &Array2<f64>) -> HalResult<f64> {
        condest_1norm(a)
    }

    fn build_qram(&mut self, spec: &QramSpec, tree: &[u64]) -> HalResult<QramId> {
        if spec.data_width == 0 || spec.data_width > 64 {
            return Err(HalError::WidthMismatch(format!(
                "data width {} outside 1..=64",
                spec.data_width
            )));
        }
        let id = QramId(self.qrams.len() as u64);
        self.qrams.push(QramEntry {
            spec: *spec,
            nodes: tree.to_vec(),
        });
        debug!(
            id = id.0,
            address_width = spec.address_width,
            data_width = spec.data_width,
            nodes = tree.len(),
            "qram built"
        );
        Ok(id)
    }

    fn add_register(&mut self, name: &str, kind: StorageKind, width: u32) -> HalResult<()> {
        if self.registers.contains_key(name) {
            return Err(HalError::RegisterExists(name.to_string()));
        }
        debug!(name, ?kind, width, "register added");
        self.registers
            .insert(name.to_string(), RegisterInfo { kind, width });
        Ok(())
    }

    fn prepare_state(
        &mut self,
        qram: &QramId,
        target: &str,
        data_width: u32,
        _rational_width: u32,
    ) -> HalResult<()> {
        let entry = self
            .qrams
            .get(qram.0 as usize)
            .ok_or(HalError::InvalidQram(qram.0))?;
        if entry.spec.data_width != data_width {
            return Err(HalError::WidthMismatch(format!(
                "qram holds {}-bit data, preparation asked for {data_width}",
                entry.spec.data_width
            )));
        }
        let reg = self
            .registers
            .get(target)
            .ok_or_else(|| HalError::UnknownRegister(target.to_string()))?;

        // The tree builder keeps the original codes as the tail block,
        // just before the zero sentinel.
        let leaf_count = 1usize << reg.width;
        if entry.nodes.len() < leaf_count + 1 {
            return Err(HalError::Engine(format!(
                "tree has {} nodes, a width-{} register needs {} leaves",
                entry.nodes.len(),
                reg.width,
                leaf_count
            )));
        }
        let tail = entry.nodes.len() - 1;
        let leaves = &entry.nodes[tail - leaf_count..tail];

        let mags: Vec<f64> = leaves
            .iter()
            .map(|&c| magnitude(c, data_width) as f64)
            .collect();
        let mass: f64 = mags.iter().map(|m| m * m).sum();
        if mass == 0.0 {
            return Err(HalError::Engine(
                "cannot prepare a state from an all-zero distribution".into(),
            ));
        }
        let norm = mass.sqrt();
        let amps: Vec<Complex64> = mags
            .iter()
            .map(|m| Complex64::new(m / norm, 0.0))
            .collect();
        debug!(target, leaves = leaf_count, "state prepared");
        self.amplitudes.insert(target.to_string(), amps);
        Ok(())
    }

    fn clear(&mut self) {
        debug!(
            registers = self.registers.len(),
            qrams = self.qrams.len(),
            "engine cleared"
        );
        self.registers.clear();
        self.qrams.clear();
        self.amplitudes.clear();
    }
}
