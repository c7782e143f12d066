pub mod consultation;
pub mod lawyer;
pub mod token;
pub mod user;

pub use consultation::ConsultationRepository;
pub use lawyer::LawyerRepository;
pub use token::{InMemoryTokenStore, TokenStore};
pub use user::UserRepository;
