//! Domain entities representing core business objects.

pub mod consultation;
pub mod lawyer;
pub mod token;
pub mod user;

// Re-export commonly used types
pub use consultation::{Consultation, ConsultationStatus};
pub use lawyer::Lawyer;
pub use token::{
    Claims, TokenPair,
    ACCESS_TOKEN_EXPIRY_SECONDS, REFRESH_TOKEN_EXPIRY_SECONDS, TOKEN_TYPE_BEARER,
};
pub use user::{User, UserRole};
