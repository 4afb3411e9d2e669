//! Database connection helpers.
//!
//! This module provides a small wrapper around the Diesel connection pool and
//! utilities to establish a connection to the SQLite database used in the
//! application. Every pooled connection gets the `regexp_match` SQL function
//! that product searches rely on.

use std::error::Error;
use std::sync::Mutex;
use std::time::Duration;

use diesel::connection::SimpleConnection;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool, PoolError, PooledConnection};
use diesel::sql_types::{Bool, Text};
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use log::{error, info};
use regex::Regex;

use crate::domain::query::compile_pattern;

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;
pub type DbConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

diesel::define_sql_function! {
    /// Case-insensitive, unanchored regular expression match.
    fn regexp_match(pattern: Text, value: Text) -> Bool;
}

#[derive(Debug)]
/// Options that are applied each time the pool opens a new connection.
pub struct ConnectionOptions {
    /// Enable Write Ahead Logging mode for SQLite.
    pub enable_wal: bool,
    /// Timeout to wait for a locked database.
    pub busy_timeout: Option<Duration>,
}

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for ConnectionOptions {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        (|| {
            if self.enable_wal {
                conn.batch_execute("PRAGMA journal_mode = WAL; PRAGMA synchronous = NORMAL;")?;
            }
            if let Some(d) = self.busy_timeout {
                conn.batch_execute(&format!("PRAGMA busy_timeout = {};", d.as_millis()))?;
            }
            register_regexp(conn)
        })()
        .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Registers `regexp_match` on the connection.
///
/// The last compiled pattern is cached since a search evaluates the same
/// pattern against every row. Patterns that do not compile match nothing.
fn register_regexp(conn: &mut SqliteConnection) -> diesel::QueryResult<()> {
    let cache: Mutex<Option<(String, Regex)>> = Mutex::new(None);

    regexp_match_utils::register_impl(conn, move |pattern: String, value: String| {
        let Ok(mut cached) = cache.lock() else {
            return false;
        };
        match cached.as_ref() {
            Some((source, re)) if *source == pattern => re.is_match(&value),
            _ => match compile_pattern(&pattern) {
                Ok(re) => {
                    let is_match = re.is_match(&value);
                    *cached = Some((pattern, re));
                    is_match
                }
                Err(_) => false,
            },
        }
    })
}

/// Create a Diesel connection pool for the given database URL.
pub fn establish_connection_pool(database_url: &str) -> Result<DbPool, PoolError> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    Pool::builder()
        .connection_customizer(Box::new(ConnectionOptions {
            enable_wal: true,
            busy_timeout: Some(Duration::from_secs(30)),
        }))
        .build(manager)
}

/// Retrieve a connection from the pool
pub fn get_connection(pool: &DbPool) -> Result<DbConnection, PoolError> {
    match pool.get() {
        Ok(conn) => Ok(conn),
        Err(e) => {
            error!("Failed to get connection from pool: {e}");
            Err(e)
        }
    }
}

/// Apply any embedded migrations that have not run yet.
pub fn run_migrations(conn: &mut SqliteConnection) -> Result<(), Box<dyn Error + Send + Sync>> {
    let applied = conn.run_pending_migrations(MIGRATIONS)?;
    for version in applied {
        info!("Applied migration {version}");
    }
    Ok(())
}
