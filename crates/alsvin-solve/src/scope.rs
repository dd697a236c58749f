//! Scoped use of the engine's shared register namespace.

use alsvin_hal::{HalResult, QuantumEngine, StorageKind};
use tracing::debug;

/// A guard around the engine's process-wide register namespace.
///
/// Register names are unique across the whole engine, so anything a
/// `solve` call adds would collide with the next call if left behind.
/// The guard clears the engine when dropped, on success and error paths
/// alike.
pub struct RegisterScope<'a, E: QuantumEngine> {
    engine: &'a mut E,
}

impl<'a, E: QuantumEngine> RegisterScope<'a, E> {
    /// Take scoped ownership of the engine's namespace.
    pub fn new(engine: &'a mut E) -> Self {
        Self { engine }
    }

    /// Add a named register through the scope.
    pub fn add(&mut self, name: &str, kind: StorageKind, width: u32) -> HalResult<()> {
        self.engine.add_register(name, kind, width)
    }

    /// Direct access to the guarded engine.
    pub fn engine(&mut self) -> &mut E {
        self.engine
    }
}

impl<E: QuantumEngine> Drop for RegisterScope<'_, E> {
    fn drop(&mut self) {
        debug!("register scope closed, clearing engine namespace");
        self.engine.clear();
    }
}
