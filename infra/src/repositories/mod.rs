//! Repository implementations
//!
//! Durable persistence is provided elsewhere; these single-node stores back
//! local runs and integration tests.

pub mod memory;

pub use memory::{InMemoryConsultationRepository, InMemoryLawyerRepository, InMemoryUserRepository};
