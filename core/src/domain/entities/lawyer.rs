//! Lawyer entity referenced by consultation requests.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_objects::LawyerProfileUpdate;

/// Lawyer profile listed in the directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lawyer {
    /// Unique identifier referenced by consultations
    pub id: Uuid,

    /// Account backing this profile
    pub user_id: Uuid,

    pub name: String,

    pub email: String,

    /// Practice area (e.g. "Family Law")
    pub specialization: Option<String>,

    pub bio: Option<String>,

    pub years_of_experience: Option<u32>,

    /// Hourly rate in whole currency units
    pub hourly_rate: Option<u32>,

    /// Whether the lawyer currently accepts new consultations
    pub is_available: bool,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl Lawyer {
    /// Creates a new, available lawyer profile
    pub fn new(user_id: Uuid, name: impl Into<String>, email: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            name: name.into(),
            email: email.into(),
            specialization: None,
            bio: None,
            years_of_experience: None,
            hourly_rate: None,
            is_available: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Sets the practice area
    pub fn with_specialization(mut self, specialization: impl Into<String>) -> Self {
        self.specialization = Some(specialization.into());
        self
    }

    /// Case-insensitive match on name or specialization
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&needle)
            || self
                .specialization
                .as_ref()
                .map(|s| s.to_lowercase().contains(&needle))
                .unwrap_or(false)
    }

    /// Applies a partial profile update; absent fields are left untouched
    pub fn apply(&mut self, update: LawyerProfileUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(specialization) = update.specialization {
            self.specialization = Some(specialization);
        }
        if let Some(bio) = update.bio {
            self.bio = Some(bio);
        }
        if let Some(years) = update.years_of_experience {
            self.years_of_experience = Some(years);
        }
        if let Some(rate) = update.hourly_rate {
            self.hourly_rate = Some(rate);
        }
        if let Some(available) = update.is_available {
            self.is_available = available;
        }
        self.updated_at = Utc::now();
    }
}
