//! Aisle Domain Layer
pub mod config;
pub mod keys;

pub use config::{CacheSettings, Config, ConfigError, LoggingConfig};
pub use keys::{cache_key, couple_tag, entity_tag, user_tag, Entity};
