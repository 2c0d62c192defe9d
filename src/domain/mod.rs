//! Domain layer - Pure business abstractions
//!
//! This layer contains NO framework dependencies.
//! Only trait definitions and domain error types.

pub mod errors;
pub mod ports;

pub use errors::{DomainError, ValidationError};
pub use ports::*;
