//! Main token service implementation

use chrono::{DateTime, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use sha2::{Digest, Sha256};
use std::time::Duration;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::domain::entities::token::{Claims, TokenPair};
use crate::domain::entities::user::User;
use crate::errors::{DomainError, TokenError};
use crate::repositories::TokenStore;

use super::config::TokenServiceConfig;

const REFRESH_KEY_PREFIX: &str = "refresh";
const BLACKLIST_KEY_PREFIX: &str = "blacklist";
const BLACKLIST_MARKER: &str = "1";

/// Service for issuing and validating access tokens and tracking
/// refresh-token and blacklist state
///
/// Access tokens are self-contained HMAC-signed JWTs. Refresh tokens and
/// revocations live in the injected `TokenStore` under hashed keys, each with
/// a TTL so no entry outlives the token it describes.
pub struct TokenService<S: TokenStore> {
    store: S,
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    /// Same as `validation` but accepts expired tokens, for blacklist TTLs
    lifetime_validation: Validation,
}

impl<S: TokenStore> TokenService<S> {
    /// Creates a new token service instance
    ///
    /// # Arguments
    ///
    /// * `store` - Token store for refresh and blacklist entries
    /// * `config` - Token service configuration
    ///
    /// # Returns
    ///
    /// A new `TokenService`, or `DomainError::Internal` if the secret is empty,
    /// the algorithm is not HMAC, or a lifetime is not positive
    pub fn new(store: S, config: TokenServiceConfig) -> Result<Self, DomainError> {
        config.validate()?;

        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(config.algorithm);
        validation.leeway = config.leeway_seconds;
        validation.validate_exp = true;
        validation.set_required_spec_claims(&["exp", "sub"]);

        let mut lifetime_validation = validation.clone();
        lifetime_validation.validate_exp = false;

        info!(
            algorithm = ?config.algorithm,
            access_ttl = config.access_token_ttl_seconds,
            refresh_ttl = config.refresh_token_ttl_seconds,
            "Token service initialised"
        );

        Ok(Self {
            store,
            config,
            encoding_key,
            decoding_key,
            validation,
            lifetime_validation,
        })
    }

    /// The backing token store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The active configuration
    pub fn config(&self) -> &TokenServiceConfig {
        &self.config
    }

    /// Issues a signed access token for a user, valid from now
    ///
    /// # Arguments
    ///
    /// * `user` - The token subject; its email becomes the `sub` claim
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - Compact JWT
    /// * `Err(TokenError::TokenGenerationFailed)` - Empty email or encoding failure
    pub fn issue_access_token(&self, user: &User) -> Result<String, DomainError> {
        self.issue_access_token_at(user, Utc::now())
    }

    /// Issues a signed access token with an explicit issue time
    pub fn issue_access_token_at(
        &self,
        user: &User,
        issued_at: DateTime<Utc>,
    ) -> Result<String, DomainError> {
        if user.email.trim().is_empty() {
            warn!(user_id = %user.id, "Refusing to issue access token without a subject");
            return Err(TokenError::TokenGenerationFailed.into());
        }

        let claims = Claims::new(
            user.email.clone(),
            issued_at,
            self.config.access_token_ttl_seconds,
        );
        let token = self.encode_jwt(&claims)?;

        debug!(user_id = %user.id, exp = claims.exp, "Issued access token");
        Ok(token)
    }

    /// Encodes claims into a JWT
    fn encode_jwt(&self, claims: &Claims) -> Result<String, DomainError> {
        let header = Header::new(self.config.algorithm);
        encode(&header, claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))
    }

    /// Verifies signature and expiry and returns the decoded claims
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - Token is authentic and unexpired
    /// * `Err(TokenError::TokenExpired)` - Current time is past `exp`
    /// * `Err(TokenError::InvalidToken)` - Malformed token or bad signature
    pub fn decode_claims(&self, token: &str) -> Result<Claims, DomainError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => DomainError::Token(TokenError::TokenExpired),
                _ => DomainError::Token(TokenError::InvalidToken),
            })
    }

    /// Validates an access token and returns its subject (the user's email)
    ///
    /// Does not consult the blacklist; see `authenticate_access_token`.
    pub fn validate_access_token(&self, token: &str) -> Result<String, DomainError> {
        self.decode_claims(token).map(|claims| claims.sub)
    }

    /// Validates an access token and rejects it if blacklisted
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - Subject of a usable token
    /// * `Err(TokenError::TokenRevoked)` - Authentic and unexpired but blacklisted
    /// * Any error from `validate_access_token`
    pub async fn authenticate_access_token(&self, token: &str) -> Result<String, DomainError> {
        let subject = self.validate_access_token(token)?;

        if self.is_blacklisted(token).await? {
            debug!("Rejected blacklisted access token");
            return Err(TokenError::TokenRevoked.into());
        }

        Ok(subject)
    }

    /// Issues an opaque refresh token bound to a user
    ///
    /// # Arguments
    ///
    /// * `user_id` - The user the token resolves to
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - Random UUID v4 token
    /// * `Err(DomainError)` - The store rejected the write
    pub async fn issue_refresh_token(&self, user_id: Uuid) -> Result<String, DomainError> {
        let token = Uuid::new_v4().to_string();

        self.store
            .put(
                &refresh_key(&token),
                &user_id.to_string(),
                self.config.refresh_ttl(),
            )
            .await?;

        debug!(user_id = %user_id, "Issued refresh token");
        Ok(token)
    }

    /// Resolves a refresh token to its user
    ///
    /// # Returns
    ///
    /// * `Ok(Some(Uuid))` - Token is active
    /// * `Ok(None)` - Never issued, revoked, or expired
    pub async fn resolve_refresh_token(&self, token: &str) -> Result<Option<Uuid>, DomainError> {
        let key = refresh_key(token);
        let value = self.store.get(&key).await?;
        Ok(value.and_then(|value| parse_user_id(&key, &value)))
    }

    /// Resolves a refresh token and revokes it in one step
    ///
    /// Of several concurrent calls with the same token, at most one gets the
    /// user back; the rest see `Ok(None)` as if the token had been revoked.
    pub async fn consume_refresh_token(&self, token: &str) -> Result<Option<Uuid>, DomainError> {
        let key = refresh_key(token);
        let value = self.store.take(&key).await?;
        debug!(consumed = value.is_some(), "Consumed refresh token");
        Ok(value.and_then(|value| parse_user_id(&key, &value)))
    }

    /// Revokes a refresh token; revoking an unknown token is not an error
    pub async fn revoke_refresh_token(&self, token: &str) -> Result<(), DomainError> {
        let removed = self.store.delete(&refresh_key(token)).await?;
        debug!(removed, "Revoked refresh token");
        Ok(())
    }

    /// Marks an access token as revoked
    ///
    /// Any string is accepted. The entry lives until the token can no longer
    /// validate (remaining lifetime plus leeway) when it decodes with a valid
    /// signature and is not long expired, otherwise for the full access
    /// token lifetime.
    pub async fn blacklist_access_token(&self, token: &str) -> Result<(), DomainError> {
        let ttl = self.blacklist_ttl(token);
        self.store
            .put(&blacklist_key(token), BLACKLIST_MARKER, ttl)
            .await?;

        info!(ttl_seconds = ttl.as_secs(), "Blacklisted access token");
        Ok(())
    }

    /// Whether an access token has been blacklisted
    pub async fn is_blacklisted(&self, token: &str) -> Result<bool, DomainError> {
        self.store.exists(&blacklist_key(token)).await
    }

    /// Issues an access token and a refresh token for a user
    pub async fn issue_token_pair(&self, user: &User) -> Result<TokenPair, DomainError> {
        let access_token = self.issue_access_token(user)?;
        let refresh_token = self.issue_refresh_token(user.id).await?;

        Ok(TokenPair::new(
            access_token,
            refresh_token,
            self.config.access_token_ttl_seconds,
            self.config.refresh_token_ttl_seconds,
        ))
    }

    /// Evicts expired refresh and blacklist entries from the store
    pub async fn purge_expired(&self) -> Result<usize, DomainError> {
        self.store.purge_expired().await
    }

    /// Lifetime of a blacklist entry
    ///
    /// Expiry is checked against whole seconds, so a token stays valid
    /// through second `exp + leeway`; the entry must outlive that second.
    fn blacklist_ttl(&self, token: &str) -> Duration {
        let now = Utc::now().timestamp();
        let remaining = decode::<Claims>(token, &self.decoding_key, &self.lifetime_validation)
            .ok()
            .map(|data| data.claims.exp - now + self.config.leeway_seconds as i64 + 1)
            .filter(|seconds| *seconds > 0);

        match remaining {
            Some(seconds) => Duration::from_secs(seconds as u64),
            None => self.config.access_ttl(),
        }
    }
}

fn parse_user_id(key: &str, value: &str) -> Option<Uuid> {
    match Uuid::parse_str(value) {
        Ok(user_id) => Some(user_id),
        Err(_) => {
            warn!(key = %key, "Refresh entry holds a malformed user id");
            None
        }
    }
}

/// Hashes a token so raw values never reach the store
pub(crate) fn hash_token(token: &str) -> String {
    hex::encode(Sha256::digest(token.as_bytes()))
}

pub(crate) fn refresh_key(token: &str) -> String {
    format!("{}:{}", REFRESH_KEY_PREFIX, hash_token(token))
}

pub(crate) fn blacklist_key(token: &str) -> String {
    format!("{}:{}", BLACKLIST_KEY_PREFIX, hash_token(token))
}
