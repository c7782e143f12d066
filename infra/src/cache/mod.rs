//! Cache module for Redis-based token state
//!
//! This module provides the Redis client with retry logic and the
//! `TokenStore` implementation built on it.

pub mod redis_client;
pub mod redis_token_store;


pub use redis_client::RedisClient;
pub use redis_token_store::RedisTokenStore;

// Re-export commonly used types
pub use le_shared::CacheConfig;
