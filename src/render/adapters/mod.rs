//! Adapter implementations for render ports.

pub mod memory;
