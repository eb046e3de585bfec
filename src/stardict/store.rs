//! SQLite-backed store for decoded `(word, definition, source)` rows.

use std::fs;
use std::path::Path;

use log::debug;
use rusqlite::Connection;

use super::error::Result;

/// Persistent store of decoded dictionary rows, indexed by word.
///
/// Imports are a one-time bulk load per source; the lookup methods are
/// read-only. Concurrent importers of the *same* source are not guarded
/// against - the check-then-import sequence in the caller assumes one
/// importer process at a time.
pub struct DictStore {
    conn: Connection,
}

impl DictStore {
    /// Open the dictionary database at `path`, creating parent directories
    /// and the schema as needed.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        Self::bootstrap(Connection::open(path)?)
    }

    /// Open a throwaway in-memory store.
    pub fn open_in_memory() -> Result<Self> {
        Self::bootstrap(Connection::open_in_memory()?)
    }

    fn bootstrap(conn: Connection) -> Result<Self> {
        conn.execute_batch(
            r#"
            create table if not exists dictionary (
                id          integer primary key,
                word        text not null,
                definition  text not null,
                source      text not null
            );

            create index if not exists idx_word on dictionary(word);
            "#,
        )?;
        Ok(Self { conn })
    }

    /// Number of rows already stored for a source. Drives the re-import
    /// idempotence check.
    pub fn count_for_source(&self, source: &str) -> Result<u64> {
        let count = self.conn.query_row(
            "select count(*) from dictionary where source = ?1",
            [source],
            |row| row.get(0),
        )?;
        Ok(count)
    }

    /// Bulk-insert decoded records for one source inside a single
    /// transaction. Returns the number of rows written.
    pub fn insert_records(
        &mut self,
        source: &str,
        records: impl Iterator<Item = (String, String)>,
    ) -> Result<u64> {
        let tx = self.conn.transaction()?;
        let mut inserted = 0u64;
        {
            let mut stmt = tx.prepare(
                "insert into dictionary (word, definition, source) values (?1, ?2, ?3)",
            )?;
            for (word, definition) in records {
                stmt.execute((&word, &definition, source))?;
                inserted += 1;
            }
        }
        tx.commit()?;

        debug!("Committed {} rows for source {}", inserted, source);
        Ok(inserted)
    }

    /// Exact, case-sensitive lookup of `(definition, source)` rows.
    pub fn lookup(&self, word: &str, limit: u32) -> Result<Vec<(String, String)>> {
        self.query_rows(
            "select definition, source from dictionary where word = ?1 limit ?2",
            word,
            limit,
        )
    }

    /// Case-insensitive fallback lookup.
    pub fn lookup_nocase(&self, word: &str, limit: u32) -> Result<Vec<(String, String)>> {
        self.query_rows(
            "select definition, source from dictionary where lower(word) = lower(?1) limit ?2",
            word,
            limit,
        )
    }

    fn query_rows(&self, sql: &str, word: &str, limit: u32) -> Result<Vec<(String, String)>> {
        let mut stmt = self.conn.prepare(sql)?;
        let rows = stmt.query_map((word, limit), |row| Ok((row.get(0)?, row.get(1)?)))?;

        let mut out = Vec::new();
        for row in rows {
            out.push(row?);
        }
        Ok(out)
    }
}
