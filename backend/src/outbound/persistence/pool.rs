//! Async connection pool for Diesel PostgreSQL connections.
//!
//! Wraps `diesel-async`'s `bb8` integration. Checkout honours the configured
//! timeout, so a saturated pool surfaces as [`PoolError::Checkout`] instead of
//! stalling a request indefinitely.

use std::time::Duration;

use diesel_async::AsyncPgConnection;
use diesel_async::pooled_connection::AsyncDieselConnectionManager;
use diesel_async::pooled_connection::bb8::{Pool, PooledConnection};
use tracing::info;

/// Errors raised while building or using the pool.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PoolError {
    /// No connection became available within the checkout timeout.
    #[error("failed to get connection from pool: {message}")]
    Checkout { message: String },

    /// The pool could not be constructed.
    #[error("failed to build connection pool: {message}")]
    Build { message: String },
}

impl PoolError {
    /// Checkout failure.
    pub fn checkout(message: impl Into<String>) -> Self {
        Self::Checkout {
            message: message.into(),
        }
    }

    /// Build failure.
    pub fn build(message: impl Into<String>) -> Self {
        Self::Build {
            message: message.into(),
        }
    }
}

/// Pool settings.
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use postbox::outbound::persistence::PoolConfig;
///
/// let config = PoolConfig::new("postgres://localhost/postbox")
///     .with_max_size(4)
///     .with_connection_timeout(Duration::from_secs(5));
/// assert_eq!(config.max_size(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct PoolConfig {
    database_url: String,
    max_size: u32,
    connection_timeout: Duration,
}

impl PoolConfig {
    /// Defaults: 10 connections, 30 second checkout timeout.
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_size: 10,
            connection_timeout: Duration::from_secs(30),
        }
    }

    /// Maximum number of pooled connections. Zero is clamped to one.
    #[must_use]
    pub fn with_max_size(mut self, max_size: u32) -> Self {
        self.max_size = max_size.max(1);
        self
    }

    /// Checkout timeout.
    #[must_use]
    pub fn with_connection_timeout(mut self, timeout: Duration) -> Self {
        self.connection_timeout = timeout;
        self
    }

    /// Database URL.
    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    /// Maximum number of pooled connections.
    pub fn max_size(&self) -> u32 {
        self.max_size
    }

    /// Checkout timeout.
    pub fn connection_timeout(&self) -> Duration {
        self.connection_timeout
    }
}

/// Shared pool of async PostgreSQL connections.
#[derive(Clone)]
pub struct DbPool {
    inner: Pool<AsyncPgConnection>,
}

impl DbPool {
    /// Build a pool. Connections are established lazily on first checkout.
    ///
    /// # Errors
    /// [`PoolError::Build`] when the manager rejects the configuration.
    pub async fn new(config: PoolConfig) -> Result<Self, PoolError> {
        let manager = AsyncDieselConnectionManager::<AsyncPgConnection>::new(config.database_url());

        let pool = Pool::builder()
            .max_size(config.max_size)
            .connection_timeout(config.connection_timeout)
            .build(manager)
            .await
            .map_err(|err| PoolError::build(err.to_string()))?;

        info!(
            max_size = config.max_size,
            timeout_secs = config.connection_timeout.as_secs(),
            "database pool ready"
        );
        Ok(Self { inner: pool })
    }

    /// Check a connection out of the pool.
    ///
    /// # Errors
    /// [`PoolError::Checkout`] when none is available within the timeout.
    pub async fn get(&self) -> Result<PooledConnection<'_, AsyncPgConnection>, PoolError> {
        self.inner
            .get()
            .await
            .map_err(|err| PoolError::checkout(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn defaults_match_settings_defaults() {
        let config = PoolConfig::new("postgres://localhost/test");

        assert_eq!(config.database_url(), "postgres://localhost/test");
        assert_eq!(config.max_size(), 10);
        assert_eq!(config.connection_timeout(), Duration::from_secs(30));
    }

    #[rstest]
    #[case(0, 1)]
    #[case(1, 1)]
    #[case(25, 25)]
    fn max_size_is_at_least_one(#[case] requested: u32, #[case] expected: u32) {
        let config = PoolConfig::new("postgres://localhost/test").with_max_size(requested);
        assert_eq!(config.max_size(), expected);
    }

    #[rstest]
    fn errors_carry_their_message() {
        assert!(PoolError::checkout("timed out").to_string().contains("timed out"));
        assert!(PoolError::build("bad url").to_string().contains("bad url"));
    }
}
