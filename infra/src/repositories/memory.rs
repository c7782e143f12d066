//! In-memory implementations of the core repository traits

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use le_core::domain::entities::{Consultation, Lawyer, User};
use le_core::errors::DomainError;
use le_core::repositories::{ConsultationRepository, LawyerRepository, UserRepository};
use le_shared::validation::normalize_email;

/// In-memory user repository keyed by user id
#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let email = normalize_email(email);
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;

        if users.values().any(|u| u.email == user.email) {
            return Err(DomainError::BusinessRule {
                message: "Email already registered".to_string(),
            });
        }

        users.insert(user.id, user.clone());
        Ok(user)
    }
}

/// In-memory lawyer directory keyed by lawyer id
#[derive(Clone, Default)]
pub struct InMemoryLawyerRepository {
    lawyers: Arc<RwLock<HashMap<Uuid, Lawyer>>>,
}

impl InMemoryLawyerRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Stable listing order for map-backed stores
fn by_name(mut lawyers: Vec<Lawyer>) -> Vec<Lawyer> {
    lawyers.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
    lawyers
}

#[async_trait]
impl LawyerRepository for InMemoryLawyerRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Lawyer>, DomainError> {
        let lawyers = self.lawyers.read().await;
        Ok(lawyers.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Lawyer>, DomainError> {
        let lawyers = self.lawyers.read().await;
        Ok(by_name(lawyers.values().cloned().collect()))
    }

    async fn search(&self, query: &str) -> Result<Vec<Lawyer>, DomainError> {
        let lawyers = self.lawyers.read().await;
        Ok(by_name(
            lawyers.values().filter(|l| l.matches(query)).cloned().collect(),
        ))
    }

    async fn create(&self, lawyer: Lawyer) -> Result<Lawyer, DomainError> {
        let mut lawyers = self.lawyers.write().await;

        if lawyers.contains_key(&lawyer.id) {
            return Err(DomainError::BusinessRule {
                message: "Lawyer profile already exists".to_string(),
            });
        }

        lawyers.insert(lawyer.id, lawyer.clone());
        Ok(lawyer)
    }

    async fn update(&self, mut lawyer: Lawyer) -> Result<Lawyer, DomainError> {
        let mut lawyers = self.lawyers.write().await;

        match lawyers.get_mut(&lawyer.id) {
            Some(existing) => {
                lawyer.updated_at = Utc::now();
                *existing = lawyer.clone();
                Ok(lawyer)
            }
            None => Err(DomainError::not_found("lawyer")),
        }
    }
}

/// In-memory consultation store keyed by consultation id
#[derive(Clone, Default)]
pub struct InMemoryConsultationRepository {
    consultations: Arc<RwLock<HashMap<Uuid, Consultation>>>,
}

impl InMemoryConsultationRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ConsultationRepository for InMemoryConsultationRepository {
    async fn create(&self, consultation: Consultation) -> Result<Consultation, DomainError> {
        let mut consultations = self.consultations.write().await;

        if consultations.contains_key(&consultation.id) {
            return Err(DomainError::BusinessRule {
                message: "Consultation already exists".to_string(),
            });
        }

        consultations.insert(consultation.id, consultation.clone());
        Ok(consultation)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Consultation>, DomainError> {
        let consultations = self.consultations.read().await;
        Ok(consultations.get(&id).cloned())
    }

    async fn find_by_client(&self, client_id: Uuid) -> Result<Vec<Consultation>, DomainError> {
        let consultations = self.consultations.read().await;
        Ok(consultations
            .values()
            .filter(|c| c.client_id == client_id)
            .cloned()
            .collect())
    }

    async fn find_by_lawyer(&self, lawyer_id: Uuid) -> Result<Vec<Consultation>, DomainError> {
        let consultations = self.consultations.read().await;
        Ok(consultations
            .values()
            .filter(|c| c.lawyer_id == lawyer_id)
            .cloned()
            .collect())
    }

    async fn update(&self, consultation: Consultation) -> Result<Consultation, DomainError> {
        let mut consultations = self.consultations.write().await;

        match consultations.get_mut(&consultation.id) {
            Some(existing) => {
                *existing = consultation.clone();
                Ok(consultation)
            }
            None => Err(DomainError::not_found("consultation")),
        }
    }
}
