//! Consultation workflow implementation

use chrono::Utc;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::domain::entities::consultation::{Consultation, ConsultationStatus};
use crate::domain::value_objects::ConsultationRequest;
use crate::errors::{DomainError, DomainResult, ValidationError};
use crate::repositories::{ConsultationRepository, LawyerRepository};

use super::config::ConsultationServiceConfig;

/// Service handling consultation booking and status changes
pub struct ConsultationService<L, C>
where
    L: LawyerRepository,
    C: ConsultationRepository,
{
    lawyer_repository: Arc<L>,
    consultation_repository: Arc<C>,
    config: ConsultationServiceConfig,
}

impl<L, C> ConsultationService<L, C>
where
    L: LawyerRepository,
    C: ConsultationRepository,
{
    /// Create a new consultation service
    ///
    /// # Arguments
    ///
    /// * `lawyer_repository` - Used to check the booked lawyer exists
    /// * `consultation_repository` - Persistence for consultations
    /// * `config` - Service configuration
    pub fn new(
        lawyer_repository: Arc<L>,
        consultation_repository: Arc<C>,
        config: ConsultationServiceConfig,
    ) -> Self {
        Self {
            lawyer_repository,
            consultation_repository,
            config,
        }
    }

    /// Book a consultation for a client
    ///
    /// # Returns
    ///
    /// * `Ok(Consultation)` - Persisted in `Pending` status
    /// * `Err(DomainError::ValidationErr)` - Missing fields, or a past schedule
    ///   when `require_future_schedule` is set
    /// * `Err(DomainError::NotFound)` - Unknown lawyer
    pub async fn request_consultation(
        &self,
        client_id: Uuid,
        request: ConsultationRequest,
    ) -> DomainResult<Consultation> {
        let (lawyer_id, scheduled_at) = request.into_parts()?;

        if self.lawyer_repository.find_by_id(lawyer_id).await?.is_none() {
            return Err(DomainError::not_found("lawyer"));
        }

        if self.config.require_future_schedule && scheduled_at <= Utc::now() {
            return Err(ValidationError::ScheduleInPast.into());
        }

        let consultation = self
            .consultation_repository
            .create(Consultation::new(client_id, lawyer_id, scheduled_at))
            .await?;

        info!(
            consultation_id = %consultation.id,
            client_id = %client_id,
            lawyer_id = %lawyer_id,
            "Consultation requested"
        );
        Ok(consultation)
    }

    /// A client's consultations, earliest first
    pub async fn list_for_client(&self, client_id: Uuid) -> DomainResult<Vec<Consultation>> {
        let consultations = self.consultation_repository.find_by_client(client_id).await?;
        Ok(sorted_by_schedule(consultations))
    }

    /// A lawyer's consultations, earliest first
    pub async fn list_for_lawyer(&self, lawyer_id: Uuid) -> DomainResult<Vec<Consultation>> {
        let consultations = self.consultation_repository.find_by_lawyer(lawyer_id).await?;
        Ok(sorted_by_schedule(consultations))
    }

    /// Move a consultation to a new status
    ///
    /// # Returns
    ///
    /// * `Err(DomainError::NotFound)` - Unknown consultation
    /// * `Err(DomainError::BusinessRule)` - Transition not allowed
    pub async fn update_status(
        &self,
        id: Uuid,
        status: ConsultationStatus,
    ) -> DomainResult<Consultation> {
        let mut consultation = self
            .consultation_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("consultation"))?;

        let previous = consultation.status;
        if !consultation.transition_to(status) {
            return Err(DomainError::BusinessRule {
                message: format!(
                    "Cannot change consultation status from {} to {}",
                    previous, status
                ),
            });
        }

        let consultation = self.consultation_repository.update(consultation).await?;
        info!(
            consultation_id = %id,
            from = %previous,
            to = %status,
            "Consultation status changed"
        );
        Ok(consultation)
    }
}

fn sorted_by_schedule(mut consultations: Vec<Consultation>) -> Vec<Consultation> {
    consultations.sort_by_key(|c| c.scheduled_at);
    consultations
}
