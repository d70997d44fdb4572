//! Configuration module for Aisle
//!
//! Configuration structures organized by area:
//! - `root`: Main configuration and file loading
//! - `cache`: Cache TTL and sweep settings
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod cache;
pub mod errors;
pub mod logging;
pub mod root;

pub use cache::CacheSettings;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::Config;
