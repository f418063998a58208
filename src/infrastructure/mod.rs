//! Infrastructure layer: concrete store implementations.

pub mod memory;
