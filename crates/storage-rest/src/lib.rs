//! Hosted data store implementation for Fundboard.
//!
//! This crate talks to the hosted relational database over its REST query
//! protocol and implements the repository traits defined in `fundboard-core`:
//! - A cloneable database client with a small query builder
//! - Conversion of transport and store errors into core errors
//! - Repository implementations and their wire row types
//!
//! # Architecture
//!
//! ```text
//!         core (domain)
//!               │
//!               ▼
//!    storage-rest (this crate)
//!               │  HTTPS
//!               ▼
//!      hosted data store
//! ```

pub mod contributions;
pub mod db;
pub mod errors;

// Re-export database client
pub use db::{DataClient, DataClientConfig, InsertQuery, Order, TableQuery};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

// Re-export from fundboard-core for convenience
pub use fundboard_core::errors::{DatabaseError, Error, Result};
