//! Token service module for JWT management
//!
//! This module handles all token-related operations including:
//! - JWT access token issuance and validation
//! - Refresh token issuance, resolution and revocation
//! - Access token blacklisting
//! - Background cleanup of expired store entries

mod cleanup;
mod config;
mod service;


pub use cleanup::{CleanupResult, TokenCleanupConfig, TokenCleanupService};
pub use config::TokenServiceConfig;
pub use service::TokenService;
