//! Step definitions for environment repository bootstrap scenarios.

mod given;
mod then;
mod when;
pub mod world;
