//! Lawyer repository trait for the lawyer directory.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::lawyer::Lawyer;
use crate::errors::DomainError;

/// Repository trait for Lawyer profile persistence
#[async_trait]
pub trait LawyerRepository: Send + Sync {
    /// Find a lawyer profile by its ID
    ///
    /// # Returns
    /// * `Ok(Some(Lawyer))` - Profile found
    /// * `Ok(None)` - No profile with the given ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Lawyer>, DomainError>;

    /// List every lawyer profile
    async fn list(&self) -> Result<Vec<Lawyer>, DomainError>;

    /// Case-insensitive match on name or specialization
    ///
    /// # Arguments
    /// * `query` - Search text; an empty query matches every profile
    async fn search(&self, query: &str) -> Result<Vec<Lawyer>, DomainError>;

    /// Store a new profile
    async fn create(&self, lawyer: Lawyer) -> Result<Lawyer, DomainError>;

    /// Replace an existing profile
    ///
    /// # Returns
    /// * `Err(DomainError::NotFound)` - No profile with that ID
    async fn update(&self, lawyer: Lawyer) -> Result<Lawyer, DomainError>;
}
