//! Lawyer directory service: lookup, search and profile updates.

use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

use crate::domain::entities::lawyer::Lawyer;
use crate::domain::value_objects::LawyerProfileUpdate;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::LawyerRepository;

/// Service over the lawyer directory
pub struct LawyerService<L: LawyerRepository> {
    lawyer_repository: Arc<L>,
}

impl<L: LawyerRepository> LawyerService<L> {
    pub fn new(lawyer_repository: Arc<L>) -> Self {
        Self { lawyer_repository }
    }

    /// Fetch a lawyer profile, failing with `NotFound` on a miss
    pub async fn get_lawyer(&self, id: Uuid) -> DomainResult<Lawyer> {
        self.lawyer_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("lawyer"))
    }

    /// Search by name or specialization; no query lists everyone
    pub async fn search_lawyers(&self, query: Option<&str>) -> DomainResult<Vec<Lawyer>> {
        let lawyers = match query.map(str::trim).filter(|q| !q.is_empty()) {
            Some(q) => self.lawyer_repository.search(q).await?,
            None => self.lawyer_repository.list().await?,
        };
        debug!(count = lawyers.len(), "Lawyer search");
        Ok(lawyers)
    }

    /// Apply a partial update to a profile
    pub async fn update_profile(
        &self,
        id: Uuid,
        update: LawyerProfileUpdate,
    ) -> DomainResult<Lawyer> {
        let mut lawyer = self.get_lawyer(id).await?;
        if update.is_empty() {
            return Ok(lawyer);
        }

        lawyer.apply(update);
        let lawyer = self.lawyer_repository.update(lawyer).await?;
        info!(lawyer_id = %lawyer.id, "Lawyer profile updated");
        Ok(lawyer)
    }
}
