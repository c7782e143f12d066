//! Mock implementations for testing the session service

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::Barrier;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainError;
use crate::repositories::{InMemoryTokenStore, TokenStore, UserRepository};

pub struct MockUserRepository {
    pub users: Arc<Mutex<Vec<User>>>,
}

impl MockUserRepository {
    pub fn new() -> Self {
        Self {
            users: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_existing_user(user: User) -> Self {
        let repo = Self::new();
        repo.users.lock().unwrap().push(user);
        repo
    }

    pub fn remove(&self, id: Uuid) {
        self.users.lock().unwrap().retain(|u| u.id != id);
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == user.email) {
            return Err(DomainError::BusinessRule {
                message: "Email already registered".to_string(),
            });
        }
        users.push(user.clone());
        Ok(user)
    }
}

/// In-memory token store that holds `take` callers at a barrier, so that
/// concurrent consumers of one key reach the store together
pub struct GatedTokenStore {
    inner: InMemoryTokenStore,
    gate: Barrier,
}

impl GatedTokenStore {
    pub fn new(parties: usize) -> Self {
        Self {
            inner: InMemoryTokenStore::new(),
            gate: Barrier::new(parties),
        }
    }
}

#[async_trait]
impl TokenStore for GatedTokenStore {
    async fn put(&self, key: &str, value: &str, ttl: Duration) -> Result<(), DomainError> {
        self.inner.put(key, value, ttl).await
    }

    async fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        self.inner.get(key).await
    }

    async fn delete(&self, key: &str) -> Result<bool, DomainError> {
        self.inner.delete(key).await
    }

    async fn take(&self, key: &str) -> Result<Option<String>, DomainError> {
        self.gate.wait().await;
        self.inner.take(key).await
    }
}
