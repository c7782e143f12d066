//! Partial update applied to a lawyer profile.

use serde::{Deserialize, Serialize};

/// Fields a lawyer may change on their own profile; `None` leaves a field as is
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LawyerProfileUpdate {
    pub name: Option<String>,
    pub specialization: Option<String>,
    pub bio: Option<String>,
    pub years_of_experience: Option<u32>,
    pub hourly_rate: Option<u32>,
    pub is_available: Option<bool>,
}

impl LawyerProfileUpdate {
    /// Whether the update would change nothing
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
