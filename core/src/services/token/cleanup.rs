//! Token cleanup service for periodic eviction of expired store entries
//!
//! Expired refresh and blacklist entries already read as absent; the sweep
//! only bounds memory for stores without native expiry.

use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use crate::errors::DomainError;
use crate::repositories::TokenStore;

use super::service::TokenService;

/// Configuration for token cleanup service
#[derive(Debug, Clone)]
pub struct TokenCleanupConfig {
    /// How often to run cleanup (in seconds)
    pub interval_seconds: u64,
    /// Whether to enable automatic cleanup
    pub enabled: bool,
}

impl Default for TokenCleanupConfig {
    fn default() -> Self {
        Self {
            interval_seconds: 300, // Run every 5 minutes
            enabled: true,
        }
    }
}

impl TokenCleanupConfig {
    /// Cleanup every `interval_seconds`; zero disables it
    pub fn every(interval_seconds: u64) -> Self {
        Self {
            interval_seconds,
            enabled: interval_seconds > 0,
        }
    }
}

/// Service for cleaning up expired token store entries
pub struct TokenCleanupService<S: TokenStore + 'static> {
    tokens: Arc<TokenService<S>>,
    config: TokenCleanupConfig,
}

impl<S: TokenStore + 'static> TokenCleanupService<S> {
    /// Create a new token cleanup service
    pub fn new(tokens: Arc<TokenService<S>>, config: TokenCleanupConfig) -> Self {
        Self { tokens, config }
    }

    /// Run a single cleanup cycle
    ///
    /// # Returns
    /// * `Ok(CleanupResult)` - Summary of the cycle; store failures are
    ///   recorded in `errors` rather than returned
    pub async fn run_cleanup(&self) -> Result<CleanupResult, DomainError> {
        if !self.config.enabled {
            return Ok(CleanupResult::default());
        }

        let started = Instant::now();
        let mut result = CleanupResult::default();

        match self.tokens.purge_expired().await {
            Ok(count) => result.entries_purged = count,
            Err(e) => {
                error!("Failed to purge expired token entries: {}", e);
                result.errors.push(format!("Purge error: {}", e));
            }
        }
        result.elapsed = started.elapsed();

        info!(
            purged = result.entries_purged,
            elapsed_ms = result.elapsed.as_millis() as u64,
            "Token cleanup completed"
        );

        Ok(result)
    }

    /// Start the cleanup service as a background task
    ///
    /// # Returns
    /// The spawned task's handle, or `None` when cleanup is disabled
    pub fn start_background_task(self: Arc<Self>) -> Option<JoinHandle<()>> {
        if !self.config.enabled || self.config.interval_seconds == 0 {
            warn!("Token cleanup service is disabled");
            return None;
        }

        let interval = Duration::from_secs(self.config.interval_seconds);

        Some(tokio::spawn(async move {
            info!(
                "Token cleanup service started - will run every {} seconds",
                self.config.interval_seconds
            );

            let mut interval_timer = tokio::time::interval(interval);

            loop {
                interval_timer.tick().await;

                match self.run_cleanup().await {
                    Ok(result) => {
                        if !result.is_success() {
                            warn!("Cleanup completed with errors: {:?}", result.errors);
                        }
                    }
                    Err(e) => {
                        error!("Token cleanup cycle failed: {}", e);
                    }
                }
            }
        }))
    }
}

/// Result of a cleanup operation
#[derive(Debug, Default)]
pub struct CleanupResult {
    /// Number of expired entries removed from the store
    pub entries_purged: usize,
    /// Wall time spent in the cycle
    pub elapsed: Duration,
    /// Any errors encountered during cleanup
    pub errors: Vec<String>,
}

impl CleanupResult {
    /// Check if the cleanup was successful (no errors)
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }
}
