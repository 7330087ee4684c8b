//! SQLite storage backend

use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::sync::Mutex;

use super::traits::{GraphStore, OpenStore, StorageResult};
use crate::graph::{DepEdge, KeywordId};

/// SQLite-backed graph store
///
/// A single database file with one table for keywords and one for
/// dependency edges. Keyword-text uniqueness and edge deduplication are
/// enforced by the schema; `INSERT OR IGNORE` makes both writes idempotent.
/// Thread-safe via internal mutex on the connection.
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Initialize the database schema
    fn init_schema(conn: &Connection) -> StorageResult<()> {
        conn.execute_batch(
            r#"
            -- Keyword identities
            CREATE TABLE IF NOT EXISTS keywords (
                key_id INTEGER PRIMARY KEY,
                keyword TEXT NOT NULL,
                UNIQUE (keyword)
            );

            -- Directed dependency edges: dependency_id is the prerequisite
            CREATE TABLE IF NOT EXISTS keyword_deps (
                dependency_id INTEGER NOT NULL,
                dependent_id INTEGER NOT NULL,
                UNIQUE (dependency_id, dependent_id),
                FOREIGN KEY (dependency_id) REFERENCES keywords(key_id),
                FOREIGN KEY (dependent_id) REFERENCES keywords(key_id)
            );

            CREATE INDEX IF NOT EXISTS idx_keyword_deps_dependency
                ON keyword_deps(dependency_id);

            PRAGMA foreign_keys = ON;
            "#,
        )?;
        Ok(())
    }
}

impl OpenStore for SqliteStore {
    fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        // Ensure parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;
        Self::init_schema(&conn)?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn open_in_memory() -> StorageResult<Self> {
        let conn = Connection::open_in_memory()?;
        Self::init_schema(&conn)?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }
}

impl GraphStore for SqliteStore {
    fn intern(&self, text: &str) -> StorageResult<KeywordId> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT OR IGNORE INTO keywords (keyword) VALUES (?1)",
            params![text],
        )?;
        let id: i64 = conn.query_row(
            "SELECT key_id FROM keywords WHERE keyword = ?1",
            params![text],
            |row| row.get(0),
        )?;
        Ok(KeywordId::from_raw(id))
    }

    fn lookup(&self, text: &str) -> StorageResult<Option<KeywordId>> {
        let conn = self.conn.lock().unwrap();
        let id: Option<i64> = conn
            .query_row(
                "SELECT key_id FROM keywords WHERE keyword = ?1",
                params![text],
                |row| row.get(0),
            )
            .optional()?;
        Ok(id.map(KeywordId::from_raw))
    }

    fn add_edge(&self, dependency: KeywordId, dependent: KeywordId) -> StorageResult<bool> {
        let conn = self.conn.lock().unwrap();
        let changed = conn.execute(
            "INSERT OR IGNORE INTO keyword_deps (dependency_id, dependent_id) VALUES (?1, ?2)",
            params![dependency.as_i64(), dependent.as_i64()],
        )?;
        Ok(changed > 0)
    }

    fn keywords(&self) -> StorageResult<Vec<(KeywordId, String)>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare("SELECT key_id, keyword FROM keywords ORDER BY key_id")?;
        let rows = stmt.query_map([], |row| {
            Ok((KeywordId::from_raw(row.get(0)?), row.get::<_, String>(1)?))
        })?;
        let mut keywords = Vec::new();
        for row in rows {
            keywords.push(row?);
        }
        Ok(keywords)
    }

    fn edges(&self) -> StorageResult<Vec<DepEdge>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(
            "SELECT dependency_id, dependent_id FROM keyword_deps ORDER BY rowid",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(DepEdge::new(
                KeywordId::from_raw(row.get(0)?),
                KeywordId::from_raw(row.get(1)?),
            ))
        })?;
        let mut edges = Vec::new();
        for row in rows {
            edges.push(row?);
        }
        Ok(edges)
    }
}
