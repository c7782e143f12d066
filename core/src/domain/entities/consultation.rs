//! Consultation entity and its status lifecycle.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle status of a consultation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConsultationStatus {
    /// Requested by a client, awaiting the lawyer
    Pending,
    /// Accepted by the lawyer
    Confirmed,
    /// Declined by the lawyer
    Rejected,
    /// Took place
    Completed,
    /// Withdrawn before it took place
    Cancelled,
}

impl ConsultationStatus {
    /// Whether moving from `self` to `next` is allowed
    pub fn can_transition_to(self, next: ConsultationStatus) -> bool {
        use ConsultationStatus::*;
        matches!(
            (self, next),
            (Pending, Confirmed)
                | (Pending, Rejected)
                | (Pending, Cancelled)
                | (Confirmed, Completed)
                | (Confirmed, Cancelled)
        )
    }

    /// Terminal statuses accept no further transitions
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            ConsultationStatus::Rejected
                | ConsultationStatus::Completed
                | ConsultationStatus::Cancelled
        )
    }
}

impl std::fmt::Display for ConsultationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ConsultationStatus::Pending => "PENDING",
            ConsultationStatus::Confirmed => "CONFIRMED",
            ConsultationStatus::Rejected => "REJECTED",
            ConsultationStatus::Completed => "COMPLETED",
            ConsultationStatus::Cancelled => "CANCELLED",
        };
        write!(f, "{}", s)
    }
}

/// A scheduled meeting between a client and a lawyer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Consultation {
    pub id: Uuid,
    pub client_id: Uuid,
    pub lawyer_id: Uuid,
    pub scheduled_at: DateTime<Utc>,
    pub status: ConsultationStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Consultation {
    /// Creates a new pending consultation
    pub fn new(client_id: Uuid, lawyer_id: Uuid, scheduled_at: DateTime<Utc>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            client_id,
            lawyer_id,
            scheduled_at,
            status: ConsultationStatus::Pending,
            notes: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Moves to `next` if the lifecycle allows it
    ///
    /// # Returns
    ///
    /// `true` if the status changed, `false` if the transition is not allowed
    pub fn transition_to(&mut self, next: ConsultationStatus) -> bool {
        if !self.status.can_transition_to(next) {
            return false;
        }
        self.status = next;
        self.updated_at = Utc::now();
        true
    }
}
