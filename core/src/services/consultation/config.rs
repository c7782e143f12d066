//! Configuration for the consultation service

/// Configuration for the consultation service
#[derive(Debug, Clone, Default)]
pub struct ConsultationServiceConfig {
    /// Reject requests whose scheduled time is not in the future
    pub require_future_schedule: bool,
}
