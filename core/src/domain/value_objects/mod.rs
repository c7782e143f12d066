//! Value objects representing immutable domain concepts.

pub mod consultation_request;
pub mod lawyer_profile_update;

// Re-export commonly used types
pub use consultation_request::ConsultationRequest;
pub use lawyer_profile_update::LawyerProfileUpdate;
