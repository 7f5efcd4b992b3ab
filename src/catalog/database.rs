//! Reelhouse Database Module
//! SQLite access with connection pooling

use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use std::path::Path;
use thiserror::Error;

pub type DbPool = Pool<SqliteConnectionManager>;
pub type DbConnection = PooledConnection<SqliteConnectionManager>;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Failed to create database pool: {0}")]
    Pool(#[from] r2d2::Error),
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

#[derive(Clone)]
pub struct Database {
    pool: DbPool,
}

impl Database {
    /// Open a pool over the database file at `db_path`.
    ///
    /// The schema is owned by whoever produced the file; nothing is created
    /// or migrated here. Every pooled connection enables foreign-key
    /// enforcement before it is handed out.
    pub fn open(db_path: &Path) -> Result<Self, DatabaseError> {
        let manager = SqliteConnectionManager::file(db_path).with_init(enable_foreign_keys);
        let pool = Pool::builder().max_size(10).build(manager)?;
        Ok(Self { pool })
    }

    /// Single-connection pool over an in-memory database.
    ///
    /// Pool size must stay at 1: each `:memory:` connection is its own
    /// database, so a larger pool would hand out empty databases.
    pub fn in_memory() -> Result<Self, DatabaseError> {
        let manager = SqliteConnectionManager::memory().with_init(enable_foreign_keys);
        let pool = Pool::builder().max_size(1).build(manager)?;
        Ok(Self { pool })
    }

    /// Check a connection out of the pool.
    ///
    /// A handler checks out one connection and reuses it for every query it
    /// issues; dropping the handle returns it to the pool on every exit
    /// path, so release happens exactly once per request.
    pub fn get_connection(&self) -> Result<DbConnection, DatabaseError> {
        Ok(self.pool.get()?)
    }
}

fn enable_foreign_keys(conn: &mut rusqlite::Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch("PRAGMA foreign_keys = ON")
}
