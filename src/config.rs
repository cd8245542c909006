//! Store configuration

use std::time::Duration;

/// Connection parameters for the document store, built once at process
/// start and passed by reference into [`crate::database::connect`].
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// MongoDB connection string.
    pub url: String,
    /// Database name.
    pub database: String,
    /// Per-operation connect/server-selection deadline.
    pub connect_timeout: Duration,
    /// Startup connection attempts before giving up.
    pub max_connect_attempts: u32,
}

impl StoreConfig {
    #[must_use]
    pub fn new(url: String, database: String) -> Self {
        Self {
            url,
            database,
            connect_timeout: Duration::from_secs(5),
            max_connect_attempts: 5,
        }
    }
}
