//! Consultation workflow module
//!
//! Turns validated client requests into persisted consultations and drives
//! their status lifecycle.

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::ConsultationServiceConfig;
pub use service::ConsultationService;
