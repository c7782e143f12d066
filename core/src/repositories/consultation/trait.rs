//! Consultation repository trait.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::consultation::Consultation;
use crate::errors::DomainError;

/// Repository trait for Consultation persistence
///
/// Implementations return lists in any order; the consultation service
/// sorts them by schedule.
#[async_trait]
pub trait ConsultationRepository: Send + Sync {
    /// Persist a new consultation
    async fn create(&self, consultation: Consultation) -> Result<Consultation, DomainError>;

    /// Find a consultation by its ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Consultation>, DomainError>;

    /// All consultations booked by a client
    async fn find_by_client(&self, client_id: Uuid) -> Result<Vec<Consultation>, DomainError>;

    /// All consultations booked with a lawyer
    async fn find_by_lawyer(&self, lawyer_id: Uuid) -> Result<Vec<Consultation>, DomainError>;

    /// Replace an existing consultation
    ///
    /// # Returns
    /// * `Err(DomainError::NotFound)` - No consultation with that ID
    async fn update(&self, consultation: Consultation) -> Result<Consultation, DomainError>;
}
