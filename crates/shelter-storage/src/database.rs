// SPDX-FileCopyrightText: 2026 Shelter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Database connection management with PRAGMA setup, WAL mode, and lifecycle.
//!
//! All reads and writes are serialized through tokio-rusqlite's single
//! background thread: `Database` IS the single writer. Query modules accept
//! `&Database` and go through `connection().call()`. Do NOT create additional
//! `Connection` instances for writes.

use std::time::Duration;

use shelter_core::ShelterError;
use tokio_rusqlite::Connection;
use tracing::debug;

/// Handle to the single on-disk SQLite database.
///
/// Readable and writable access share this one connection; the schema is
/// created via embedded migrations on first open.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open (creating if absent) the database at `path` with WAL mode on.
    pub async fn open(path: &str) -> Result<Self, ShelterError> {
        Self::open_with(path, true).await
    }

    /// Open the database with explicit journal-mode selection.
    pub async fn open_with(path: &str, wal_mode: bool) -> Result<Self, ShelterError> {
        let conn = Connection::open(path).await.map_err(|e| map_tr_err(e.into()))?;

        conn.call(move |conn| {
            if wal_mode {
                conn.execute_batch("PRAGMA journal_mode = WAL;")?;
            }
            conn.execute_batch("PRAGMA synchronous = NORMAL; PRAGMA foreign_keys = ON;")?;
            conn.busy_timeout(Duration::from_secs(5))?;
            crate::migrations::run_migrations(conn)
                .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;
            Ok(())
        })
        .await
        .map_err(map_tr_err)?;

        debug!(path, wal_mode, "database opened");
        Ok(Database { conn })
    }

    /// The underlying tokio-rusqlite connection.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Checkpoint the WAL and flush pending writes.
    pub async fn close(&self) -> Result<(), ShelterError> {
        self.conn
            .call(|conn| {
                conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
                Ok(())
            })
            .await
            .map_err(map_tr_err)?;
        debug!("WAL checkpoint complete");
        Ok(())
    }
}

/// Convert a tokio-rusqlite transport error into the shared storage error.
pub fn map_tr_err(e: tokio_rusqlite::Error) -> ShelterError {
    ShelterError::Storage {
        source: Box::new(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn open_creates_file_and_pets_table() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("create.db");
        let db = Database::open(db_path.to_str().unwrap()).await.unwrap();

        assert!(db_path.exists(), "database file should be created");

        let count: i64 = db
            .connection()
            .call(|conn| {
                let n = conn.query_row("SELECT COUNT(*) FROM pets", [], |row| row.get(0))?;
                Ok::<_, rusqlite::Error>(n)
            })
            .await
            .unwrap();
        assert_eq!(count, 0);

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn reopening_is_idempotent() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("reopen.db");

        let db = Database::open(db_path.to_str().unwrap()).await.unwrap();
        db.close().await.unwrap();
        drop(db);

        // Second open must not attempt to recreate the schema.
        let db = Database::open(db_path.to_str().unwrap()).await.unwrap();
        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn open_without_wal_mode_still_works() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("rollback.db");
        let db = Database::open_with(db_path.to_str().unwrap(), false)
            .await
            .unwrap();

        db.connection()
            .call(|conn| {
                conn.execute(
                    "INSERT INTO pets (name, gender, weight) VALUES (?, ?, ?)",
                    rusqlite::params!["GARFIELD", 1_i64, 4_i64],
                )?;
                Ok::<_, rusqlite::Error>(())
            })
            .await
            .unwrap();

        db.close().await.unwrap();
    }
}
