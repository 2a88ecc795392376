//! Environment repository selection and bootstrap.
//!
//! This module chooses exactly one environment repository backend at process
//! startup, fixes its default label, publishes it as the single shared
//! repository, and optionally binds a health probe to it. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
