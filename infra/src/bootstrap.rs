//! Application bootstrap: configuration, token store and token service wiring

use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::info;

use le_core::repositories::{InMemoryTokenStore, TokenStore};
use le_core::services::token::{
    TokenCleanupConfig, TokenCleanupService, TokenService, TokenServiceConfig,
};
use le_shared::{AppConfig, CacheConfig, Environment, TokenStoreBackend};

use crate::cache::RedisTokenStore;
use crate::telemetry::init_tracing;
use crate::InfrastructureError;

/// Token service over whichever backend the configuration selected
pub type SharedTokenService = Arc<TokenService<Arc<dyn TokenStore>>>;

/// Wired application services
pub struct AppContext {
    /// Configuration the context was built from
    pub config: AppConfig,
    /// Token service shared by session handling
    pub token_service: SharedTokenService,
    /// Background cleanup task, when enabled for the backend
    pub cleanup_task: Option<JoinHandle<()>>,
}

impl AppContext {
    /// Stop background work
    pub fn shutdown(&mut self) {
        if let Some(task) = self.cleanup_task.take() {
            task.abort();
        }
    }
}

impl Drop for AppContext {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Create the configured token store backend
pub async fn build_token_store(
    config: &CacheConfig,
) -> Result<Arc<dyn TokenStore>, InfrastructureError> {
    match config.backend {
        TokenStoreBackend::Memory => {
            info!("Using in-memory token store");
            Ok(Arc::new(InMemoryTokenStore::new()))
        }
        TokenStoreBackend::Redis => {
            info!("Using Redis token store with prefix '{}'", config.key_prefix);
            Ok(Arc::new(RedisTokenStore::connect(config.clone()).await?))
        }
    }
}

/// Create the token service from the JWT configuration
pub fn build_token_service(
    config: &AppConfig,
    store: Arc<dyn TokenStore>,
) -> Result<SharedTokenService, InfrastructureError> {
    let token_config = TokenServiceConfig::from_jwt_config(&config.auth.jwt)?;
    Ok(Arc::new(TokenService::new(store, token_config)?))
}

/// Wire services from an explicit configuration
///
/// Cleanup only runs for the in-memory backend; Redis expires keys itself.
pub async fn initialize_with(config: AppConfig) -> Result<AppContext, InfrastructureError> {
    let store = build_token_store(&config.cache).await?;
    let token_service = build_token_service(&config, store)?;

    let cleanup_task = match config.cache.backend {
        TokenStoreBackend::Memory => {
            let cleanup = TokenCleanupService::new(
                Arc::clone(&token_service),
                TokenCleanupConfig::every(config.cache.cleanup_interval),
            );
            Arc::new(cleanup).start_background_task()
        }
        TokenStoreBackend::Redis => None,
    };

    info!(
        environment = %config.environment,
        backend = %config.cache.backend,
        "Services initialized"
    );

    Ok(AppContext {
        config,
        token_service,
        cleanup_task,
    })
}

/// Load `.env`, read configuration from the environment, install tracing
/// and wire services
pub async fn initialize() -> anyhow::Result<AppContext> {
    dotenvy::dotenv().ok(); // Load .env file if present

    // Environment-specific file fills in anything .env left unset
    if let Err(e) = dotenvy::from_filename(Environment::from_env().env_file()) {
        if !e.not_found() {
            return Err(e.into());
        }
    }

    let config = AppConfig::from_env()?;

    init_tracing(&config.logging)?;
    info!("Initializing LegalEase services...");

    Ok(initialize_with(config).await?)
}
