//! `alsvin-adapter-sim` — in-memory reference engine.
//!
//! Implements the `alsvin-hal` boundary without any gate-level
//! simulation: registers and QRAMs are plain tables, state preparation
//! writes normalized leaf magnitudes as amplitudes, and the condition
//! estimator inverts the matrix outright. Intended for tests and demos.

pub mod condest;
pub mod engine;

pub use condest::condest_1norm;
pub use engine::{QramId, RegisterInfo, SimEngine};
