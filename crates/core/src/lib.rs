//! Fundboard Core - Domain entities, services, and traits.
//!
//! This crate contains the contribution domain for Fundboard.
//! It is storage-agnostic and defines traits that are implemented
//! by the `storage-rest` crate.

pub mod constants;
pub mod contributions;
pub mod errors;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
