//! # LegalEase Core
//!
//! Core business logic and domain layer for the LegalEase backend.
//! This crate contains domain entities, the token service and the session and
//! consultation workflows built on it, repository interfaces, and error types.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
