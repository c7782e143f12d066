//! Business services containing domain logic and use cases.

pub mod consultation;
pub mod lawyer_service;
pub mod session;
pub mod token;

// Re-export commonly used types
pub use consultation::{ConsultationService, ConsultationServiceConfig};
pub use lawyer_service::LawyerService;
pub use session::SessionService;
pub use token::{
    CleanupResult, TokenCleanupConfig, TokenCleanupService, TokenService, TokenServiceConfig,
};
