//! Alsvin Engine Abstraction Layer
//!
//! A thin, synchronous boundary between the classical encoding pipeline
//! and whatever engine ultimately holds the quantum state. The pipeline
//! never touches amplitudes itself: it hands flattened amplitude trees,
//! register declarations and a state-preparation request across this
//! boundary and walks away.
//!
//! # Example
//!
//! ```ignore
//! use alsvin_hal::{QramSpec, QuantumEngine, StorageKind};
//! use alsvin_adapter_sim::SimEngine;
//!
//! let mut engine = SimEngine::new();
//! let qram = engine.build_qram(
//!     &QramSpec { address_width: 3, data_width: 50 },
//!     tree.nodes(),
//! )?;
//! engine.add_register("main_reg", StorageKind::UnsignedInteger, 2)?;
//! engine.prepare_state(&qram, "main_reg", 50, 51)?;
//! ```

pub mod engine;
pub mod error;

pub use engine::{QramSpec, QuantumEngine, StorageKind};
pub use error::{HalError, HalResult};
