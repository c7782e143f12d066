//! Session flow implementation

use std::sync::Arc;
use tracing::{info, warn};

use le_shared::validation::{mask_email, normalize_email};

use crate::domain::entities::token::TokenPair;
use crate::domain::entities::user::User;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{TokenStore, UserRepository};
use crate::services::token::TokenService;

/// Service coordinating the token lifecycle for authenticated users
pub struct SessionService<U, S>
where
    U: UserRepository,
    S: TokenStore,
{
    /// User repository for subject lookups
    user_repository: Arc<U>,
    /// Token service for JWT and refresh-token management
    token_service: Arc<TokenService<S>>,
}

impl<U, S> SessionService<U, S>
where
    U: UserRepository,
    S: TokenStore,
{
    /// Create a new session service
    ///
    /// # Arguments
    ///
    /// * `user_repository` - Repository resolving users by id and email
    /// * `token_service` - Service for token issuance and revocation
    pub fn new(user_repository: Arc<U>, token_service: Arc<TokenService<S>>) -> Self {
        Self {
            user_repository,
            token_service,
        }
    }

    /// Issue a token pair for a user whose credentials were already checked
    ///
    /// # Returns
    ///
    /// * `Ok(TokenPair)` - Fresh access and refresh tokens
    /// * `Err(DomainError::NotFound)` - No user with that email
    pub async fn start_session(&self, email: &str) -> DomainResult<TokenPair> {
        let email = normalize_email(email);
        let user = self
            .user_repository
            .find_by_email(&email)
            .await?
            .ok_or_else(|| DomainError::not_found("user"))?;

        let pair = self.token_service.issue_token_pair(&user).await?;
        info!(user_id = %user.id, email = %mask_email(&user.email), "Session started");
        Ok(pair)
    }

    /// Exchange a refresh token for a new pair, revoking the old token
    ///
    /// The old token is consumed before anything else, so concurrent
    /// refreshes with the same token yield at most one new pair.
    ///
    /// # Returns
    ///
    /// * `Ok(TokenPair)` - Rotated tokens
    /// * `Err(DomainError::NotFound)` - Refresh token inactive or already
    ///   used, or its user is gone
    pub async fn refresh_session(&self, refresh_token: &str) -> DomainResult<TokenPair> {
        let user_id = self
            .token_service
            .consume_refresh_token(refresh_token)
            .await?
            .ok_or_else(|| DomainError::not_found("refresh token"))?;

        let user = self.user_repository.find_by_id(user_id).await?.ok_or_else(|| {
            warn!(user_id = %user_id, "Refresh token belonged to a missing user");
            DomainError::not_found("user")
        })?;

        let pair = self.token_service.issue_token_pair(&user).await?;

        info!(user_id = %user.id, "Session refreshed");
        Ok(pair)
    }

    /// Revoke the tokens of a session; repeating the call is harmless
    pub async fn end_session(
        &self,
        access_token: &str,
        refresh_token: Option<&str>,
    ) -> DomainResult<()> {
        self.token_service.blacklist_access_token(access_token).await?;
        if let Some(refresh_token) = refresh_token {
            self.token_service.revoke_refresh_token(refresh_token).await?;
        }

        info!(refresh_revoked = refresh_token.is_some(), "Session ended");
        Ok(())
    }

    /// Resolve the user behind a usable access token
    ///
    /// # Returns
    ///
    /// * `Ok(User)` - Token is valid, not blacklisted, and its subject exists
    /// * `Err(DomainError::Token(_))` - Invalid, expired, or revoked token
    /// * `Err(DomainError::Unauthorized)` - Subject no longer exists
    pub async fn authenticate(&self, access_token: &str) -> DomainResult<User> {
        let email = self
            .token_service
            .authenticate_access_token(access_token)
            .await?;

        self.user_repository
            .find_by_email(&email)
            .await?
            .ok_or(DomainError::Unauthorized)
    }
}
