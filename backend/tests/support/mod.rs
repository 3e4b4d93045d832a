//! Shared helpers for the embedded PostgreSQL integration suite.

use postgres::{Client, NoTls};

pub mod pg_embed;

/// Render a `postgres` error with its SQLSTATE and server message.
pub fn format_postgres_error(error: &postgres::Error) -> String {
    let Some(db_error) = error.as_db_error() else {
        return error.to_string();
    };
    let mut summary = format!(
        "postgres error {:?}: {}",
        db_error.code(),
        db_error.message()
    );
    if let Some(detail) = db_error.detail() {
        summary.push_str("; detail: ");
        summary.push_str(detail);
    }
    summary
}

/// Drop and recreate `database` on the cluster reachable through
/// `admin_url`.
pub fn reset_database(admin_url: &str, database: &str) -> Result<(), String> {
    let mut client =
        Client::connect(admin_url, NoTls).map_err(|err| format_postgres_error(&err))?;
    client
        .batch_execute(&format!(
            "DROP DATABASE IF EXISTS \"{database}\"; CREATE DATABASE \"{database}\";"
        ))
        .map_err(|err| format_postgres_error(&err))
}

/// True when `SKIP_TEST_CLUSTER` is `1`, `true` or `yes`.
pub fn should_skip_test_cluster() -> bool {
    std::env::var("SKIP_TEST_CLUSTER")
        .map(|value| matches!(value.to_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

/// Skip with a marker when `SKIP_TEST_CLUSTER` is set, otherwise fail loudly.
pub fn handle_cluster_setup_failure<T>(reason: impl std::fmt::Display) -> Option<T> {
    if should_skip_test_cluster() {
        eprintln!("SKIP-TEST-CLUSTER: {reason}");
        None
    } else {
        panic!("Test cluster setup failed: {reason}. Set SKIP_TEST_CLUSTER=1 to skip.");
    }
}
