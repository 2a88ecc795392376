//! Adapter implementations for environment repository ports.

pub mod memory;
