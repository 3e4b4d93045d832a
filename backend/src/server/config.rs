//! Runtime settings and the server configuration built from them.

use std::net::SocketAddr;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use postbox::outbound::persistence::{DbPool, PoolConfig};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_POOL_MAX_SIZE: u32 = 10;
const DEFAULT_POOL_TIMEOUT_SECS: u64 = 30;

/// Settings loaded from CLI flags and `POSTBOX_*` environment variables.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "POSTBOX")]
pub struct AppSettings {
    /// Socket address to listen on.
    pub bind_addr: Option<String>,
    /// PostgreSQL URL. Without one the server keeps data in memory.
    pub database_url: Option<String>,
    /// Maximum pooled database connections.
    pub pool_max_size: Option<u32>,
    /// Seconds to wait for a pooled connection.
    pub pool_connection_timeout_secs: Option<u64>,
    /// Do not apply embedded migrations before serving.
    #[ortho_config(default = false)]
    pub skip_migrations: bool,
}

impl AppSettings {
    /// Parsed listen address.
    ///
    /// # Errors
    /// `InvalidInput` when the configured value is not a socket address.
    pub fn bind_addr(&self) -> std::io::Result<SocketAddr> {
        let raw = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        raw.parse().map_err(|err| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("invalid bind address {raw:?}: {err}"),
            )
        })
    }

    /// Configured database URL, ignoring blank values.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Whether to apply migrations at startup. True unless
    /// `skip_migrations` is set.
    pub fn run_migrations(&self) -> bool {
        !self.skip_migrations
    }

    /// Pool configuration for `database_url`.
    pub fn pool_config(&self, database_url: &str) -> PoolConfig {
        PoolConfig::new(database_url)
            .with_max_size(self.pool_max_size.unwrap_or(DEFAULT_POOL_MAX_SIZE))
            .with_connection_timeout(Duration::from_secs(
                self.pool_connection_timeout_secs
                    .unwrap_or(DEFAULT_POOL_TIMEOUT_SECS),
            ))
    }
}

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: Option<DbPool>,
}

impl ServerConfig {
    /// Configuration backed by the in-memory gateway.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            db_pool: None,
        }
    }

    /// Use PostgreSQL repositories over `pool`.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }
}

#[cfg(test)]
mod tests {
    //! Settings parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 5] = [
        "POSTBOX_BIND_ADDR",
        "POSTBOX_DATABASE_URL",
        "POSTBOX_POOL_MAX_SIZE",
        "POSTBOX_POOL_CONNECTION_TIMEOUT_SECS",
        "POSTBOX_SKIP_MIGRATIONS",
    ];

    fn load_from_empty_args() -> AppSettings {
        AppSettings::load_from_iter([OsString::from("postbox")]).expect("config should load")
    }

    #[rstest]
    fn defaults_apply_when_unset() {
        let _guard = lock_env(VARS.map(|name| (name, None::<String>)));

        let settings = load_from_empty_args();

        assert_eq!(
            settings.bind_addr().expect("default address"),
            "0.0.0.0:8080".parse::<SocketAddr>().expect("literal address")
        );
        assert!(settings.database_url().is_none());
        assert!(settings.run_migrations());
        let pool = settings.pool_config("postgres://localhost/postbox");
        assert_eq!(pool.max_size(), 10);
        assert_eq!(pool.connection_timeout(), Duration::from_secs(30));
    }

    #[rstest]
    fn database_url_alone_still_runs_migrations() {
        let _guard = lock_env([
            ("POSTBOX_BIND_ADDR", None),
            (
                "POSTBOX_DATABASE_URL",
                Some("postgres://db/postbox".to_owned()),
            ),
            ("POSTBOX_POOL_MAX_SIZE", None),
            ("POSTBOX_POOL_CONNECTION_TIMEOUT_SECS", None),
            ("POSTBOX_SKIP_MIGRATIONS", None),
        ]);

        let settings = load_from_empty_args();

        assert!(!settings.skip_migrations);
        assert!(settings.run_migrations());
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("POSTBOX_BIND_ADDR", Some("127.0.0.1:9000".to_owned())),
            (
                "POSTBOX_DATABASE_URL",
                Some("postgres://db/postbox".to_owned()),
            ),
            ("POSTBOX_POOL_MAX_SIZE", Some("4".to_owned())),
            ("POSTBOX_POOL_CONNECTION_TIMEOUT_SECS", Some("5".to_owned())),
            ("POSTBOX_SKIP_MIGRATIONS", Some("true".to_owned())),
        ]);

        let settings = load_from_empty_args();

        assert_eq!(
            settings.bind_addr().expect("address").port(),
            9000
        );
        assert_eq!(settings.database_url(), Some("postgres://db/postbox"));
        assert!(!settings.run_migrations());
        let pool = settings.pool_config("postgres://db/postbox");
        assert_eq!(pool.max_size(), 4);
        assert_eq!(pool.connection_timeout(), Duration::from_secs(5));
    }

    #[rstest]
    #[case(Some("   "), None)]
    #[case(Some("postgres://db/x"), Some("postgres://db/x"))]
    #[case(None, None)]
    fn blank_database_url_means_in_memory(
        #[case] raw: Option<&str>,
        #[case] expected: Option<&str>,
    ) {
        let settings = AppSettings {
            bind_addr: None,
            database_url: raw.map(str::to_owned),
            pool_max_size: None,
            pool_connection_timeout_secs: None,
            skip_migrations: false,
        };
        assert_eq!(settings.database_url(), expected);
    }

    #[rstest]
    fn invalid_bind_address_is_rejected() {
        let settings = AppSettings {
            bind_addr: Some("not an address".to_owned()),
            database_url: None,
            pool_max_size: None,
            pool_connection_timeout_secs: None,
            skip_migrations: false,
        };
        let err = settings.bind_addr().expect_err("invalid");
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidInput);
    }
}
