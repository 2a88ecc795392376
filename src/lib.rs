//! envrepo: environment repository bootstrap for configuration servers.
//!
//! A configuration server answers requests for the configuration of an
//! application, profile, and label from one backing store. This crate
//! decides, once at startup, which backend serves those requests and wires
//! it up: it selects exactly one backend from the active deployment
//! profiles, fixes the backend's default label, publishes it as the single
//! shared repository, and binds a health probe to it.
//!
//! # Architecture
//!
//! envrepo follows hexagonal architecture principles:
//!
//! - **Domain**: Pure selection inputs and repository values
//! - **Ports**: The repository and factory traits the concrete backends
//!   implement
//! - **Adapters**: In-memory backends for tests and local runs
//! - **Services**: Selection, label resolution, health probing, bootstrap
//!
//! # Modules
//!
//! - [`environment`]: Backend selection, registry, and health probing
//! - [`config`]: Bootstrap configuration loading

pub mod config;
pub mod environment;
