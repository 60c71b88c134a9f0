//! Infrastructure implementations.
//!
//! Contains port trait implementations for external dependencies.

pub mod entropy;
pub mod ports;
pub mod settings;
