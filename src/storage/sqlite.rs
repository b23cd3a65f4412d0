use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::traits::Storage;

pub(crate) const DB_SCHEMA_VERSION: i64 = 1;

const SCHEMA_V1: &str = "
    CREATE TABLE IF NOT EXISTS kv (
        key        TEXT PRIMARY KEY,
        value      TEXT NOT NULL,
        updated_at INTEGER NOT NULL DEFAULT (strftime('%s', 'now'))
    );
";

/// Both logical keys live as rows of a single `kv` table.
#[derive(Clone, Debug)]
pub struct SqliteStorage {
    path: PathBuf,
}

impl SqliteStorage {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Delete the database file. A missing file is not an error.
    pub fn reset_all(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                log::info!("🧹 Removed {}", self.path.display());
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).with_context(|| format!("removing {}", self.path.display())),
        }
    }

    /// Create or validate the schema up front so a bad file fails at startup.
    pub fn init(&self) -> Result<()> {
        self.open().map(drop)
    }

    fn open(&self) -> Result<Connection> {
        let conn = Connection::open(&self.path)
            .with_context(|| format!("opening {}", self.path.display()))?;
        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.pragma_update(None, "synchronous", "NORMAL")?;
        conn.busy_timeout(Duration::from_millis(500))?;
        ensure_schema(&conn)?;
        Ok(conn)
    }
}

fn ensure_schema(conn: &Connection) -> Result<()> {
    let found: i64 = conn.pragma_query_value(None, "user_version", |row| row.get(0))?;
    match found {
        DB_SCHEMA_VERSION => Ok(()),
        0 => {
            log::info!("🗄️ Creating quote database schema v{}", DB_SCHEMA_VERSION);
            conn.execute_batch(SCHEMA_V1)?;
            conn.pragma_update(None, "user_version", DB_SCHEMA_VERSION)?;
            Ok(())
        }
        other => anyhow::bail!(
            "database schema version mismatch (found {other}, expected {DB_SCHEMA_VERSION}); please run with --reset option"
        ),
    }
}

impl Storage for SqliteStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let conn = self.open()?;
        let value = conn
            .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
                row.get(0)
            })
            .optional()
            .with_context(|| format!("reading key {key}"))?;
        Ok(value)
    }

    fn put(&self, key: &str, value: &str) -> Result<()> {
        let conn = self.open()?;
        conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = strftime('%s', 'now')",
            params![key, value],
        )
        .with_context(|| format!("writing key {key}"))?;
        Ok(())
    }
}
