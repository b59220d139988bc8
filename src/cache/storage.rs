//! SQLite-indexed cache storage with file payloads
//!
//! Payload bytes live in `<root>/<category>/<stem>.json`, untouched. The
//! `index.db` table records when each key was last written; staleness is
//! always computed from that column, never from filesystem mtimes.

use chrono::{DateTime, TimeDelta, Utc};
use rusqlite::{Connection, OptionalExtension, params};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use super::{CacheKey, Category, Ttl};
use crate::error::CacheError;

/// Schema version - increment to trigger nuke-and-rebuild
const SCHEMA_VERSION: i32 = 1;

const INDEX_FILE: &str = "index.db";

type Result<T> = std::result::Result<T, CacheError>;

/// Durable key -> payload storage with last-write tracking.
///
/// Every call goes back to storage; nothing is memoized between calls so a
/// refresh written by another collection run is observed immediately.
pub struct CacheStore {
    conn: Mutex<Connection>,
    root: PathBuf,
}

impl CacheStore {
    /// Get the default cache directory (~/.cache/geobrief on Linux)
    pub fn default_dir() -> Result<PathBuf> {
        let cache_base = dirs::cache_dir().ok_or(CacheError::NoHome)?;
        Ok(cache_base.join("geobrief"))
    }

    /// Open or create the cache rooted at `root`
    pub fn open_at(root: &Path) -> Result<Self> {
        std::fs::create_dir_all(root)
            .map_err(|e| CacheError::Io(format!("Failed to create cache dir: {}", e)))?;

        let db_path = root.join(INDEX_FILE);
        let conn = Connection::open(&db_path)?;

        // Check schema version - nuke if mismatched
        let version: i32 = conn
            .pragma_query_value(None, "user_version", |r| r.get(0))
            .unwrap_or(0);

        if version != 0 && version != SCHEMA_VERSION {
            log::info!(
                "Cache schema version mismatch ({} != {}), rebuilding",
                version,
                SCHEMA_VERSION
            );
            drop(conn);
            Self::nuke(root)?;
            return Self::open_at(root);
        }

        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS cache_entries (
                cache_key TEXT PRIMARY KEY NOT NULL,
                category TEXT NOT NULL,
                payload_path TEXT NOT NULL,
                written_at INTEGER NOT NULL,
                size_bytes INTEGER NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_category ON cache_entries(category);
            "#,
        )?;

        conn.pragma_update(None, "user_version", SCHEMA_VERSION)?;

        Ok(Self {
            conn: Mutex::new(conn),
            root: root.to_path_buf(),
        })
    }

    /// Cache root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| CacheError::Database("cache index lock poisoned".to_string()))
    }

    fn relative_path(key: &CacheKey) -> String {
        format!("{}/{}.json", key.category().as_str(), key.file_stem())
    }

    /// Last successful write for `key`, or `None` if there is no payload.
    ///
    /// An index row whose payload file has gone missing is dropped.
    pub fn written_at(&self, key: &CacheKey) -> Result<Option<DateTime<Utc>>> {
        let conn = self.conn()?;
        let row: Option<(String, i64)> = conn
            .query_row(
                "SELECT payload_path, written_at FROM cache_entries WHERE cache_key = ?1",
                params![key.to_string()],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .optional()?;

        let Some((payload_path, written_millis)) = row else {
            return Ok(None);
        };

        if !self.root.join(&payload_path).is_file() {
            log::warn!("Cached payload {} is missing, dropping entry", payload_path);
            conn.execute(
                "DELETE FROM cache_entries WHERE cache_key = ?1",
                params![key.to_string()],
            )?;
            return Ok(None);
        }

        DateTime::from_timestamp_millis(written_millis)
            .map(Some)
            .ok_or_else(|| CacheError::Database(format!("bad timestamp for {}", key)))
    }

    /// Whether a payload has been written for `key` and is still on disk
    pub fn exists(&self, key: &CacheKey) -> Result<bool> {
        Ok(self.written_at(key)?.is_some())
    }

    /// Time since the payload for `key` was last written
    pub fn age(&self, key: &CacheKey) -> Result<TimeDelta> {
        self.age_at(key, Utc::now())
    }

    fn age_at(&self, key: &CacheKey, now: DateTime<Utc>) -> Result<TimeDelta> {
        let written = self
            .written_at(key)?
            .ok_or_else(|| CacheError::NotFound(key.to_string()))?;
        Ok(now - written)
    }

    /// The staleness predicate shared by every collector.
    ///
    /// Missing and expired are the same state. A storage error while checking
    /// also counts as stale, so the caller attempts a refresh.
    pub fn is_stale(&self, key: &CacheKey, ttl: Ttl) -> bool {
        self.is_stale_at(key, ttl, Utc::now())
    }

    /// [`CacheStore::is_stale`] evaluated at an explicit instant
    pub fn is_stale_at(&self, key: &CacheKey, ttl: Ttl, now: DateTime<Utc>) -> bool {
        if ttl.always_stale() {
            return true;
        }
        match self.age_at(key, now) {
            Ok(age) => ttl.as_delta().is_some_and(|ttl| age >= ttl),
            Err(CacheError::NotFound(_)) => true,
            Err(e) => {
                log::warn!("Could not check freshness of {}: {}", key, e);
                true
            }
        }
    }

    /// Persist `payload` for `key` and stamp it with the current time.
    ///
    /// The payload is written to a temporary file and renamed into place, so
    /// a reader sees either the previous payload or the new one.
    pub fn write(&self, key: &CacheKey, payload: &[u8]) -> Result<()> {
        let rel_path = Self::relative_path(key);
        let full_path = self.root.join(&rel_path);
        let namespace = self.root.join(key.category().as_str());

        std::fs::create_dir_all(&namespace)
            .map_err(|e| CacheError::Io(format!("Failed to create {}: {}", namespace.display(), e)))?;

        let tmp_path = full_path.with_extension("json.tmp");
        std::fs::write(&tmp_path, payload)
            .map_err(|e| CacheError::Io(format!("Failed to write payload: {}", e)))?;
        std::fs::rename(&tmp_path, &full_path)
            .map_err(|e| CacheError::Io(format!("Failed to move payload into place: {}", e)))?;

        let now = Utc::now().timestamp_millis();
        self.conn()?.execute(
            "INSERT OR REPLACE INTO cache_entries
             (cache_key, category, payload_path, written_at, size_bytes)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                key.to_string(),
                key.category().as_str(),
                rel_path,
                now,
                payload.len() as i64
            ],
        )?;

        log::debug!("Cached {} ({} bytes)", key, payload.len());
        Ok(())
    }

    /// Read the raw payload for `key`
    pub fn read(&self, key: &CacheKey) -> Result<Vec<u8>> {
        if self.written_at(key)?.is_none() {
            return Err(CacheError::NotFound(key.to_string()));
        }
        let path = self.root.join(Self::relative_path(key));
        std::fs::read(&path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => CacheError::NotFound(key.to_string()),
            _ => CacheError::Io(format!("Failed to read {}: {}", path.display(), e)),
        })
    }

    /// Metadata of every cached entry, ordered by key
    pub fn entries(&self) -> Result<Vec<EntryInfo>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT cache_key, written_at, size_bytes FROM cache_entries ORDER BY cache_key",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, i64>(1)?,
                row.get::<_, i64>(2)?,
            ))
        })?;

        let mut entries = Vec::new();
        for row in rows {
            let (raw_key, written_millis, size) = row?;
            let (Some(key), Some(written_at)) = (
                CacheKey::parse(&raw_key),
                DateTime::from_timestamp_millis(written_millis),
            ) else {
                log::warn!("Skipping unreadable cache index row {}", raw_key);
                continue;
            };
            entries.push(EntryInfo {
                key,
                written_at,
                size_bytes: size.max(0) as usize,
            });
        }
        Ok(entries)
    }

    /// Get cache statistics
    pub fn stats(&self) -> Result<CacheStats> {
        let entries = self.entries()?;
        let mut per_category: Vec<(Category, usize)> =
            Category::ALL.iter().map(|c| (*c, 0)).collect();
        for entry in &entries {
            if let Some(slot) = per_category
                .iter_mut()
                .find(|(c, _)| *c == entry.key.category())
            {
                slot.1 += 1;
            }
        }

        Ok(CacheStats {
            total_entries: entries.len(),
            total_size_bytes: entries.iter().map(|e| e.size_bytes).sum(),
            oldest_entry: entries.iter().map(|e| e.written_at).min(),
            newest_entry: entries.iter().map(|e| e.written_at).max(),
            per_category,
        })
    }

    /// Clear all cache entries and payload files
    pub fn clear_all(&self) -> Result<ClearStats> {
        let conn = self.conn()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM cache_entries", [], |r| r.get(0))?;
        conn.execute("DELETE FROM cache_entries", [])?;

        for category in Category::ALL {
            let dir = self.root.join(category.as_str());
            if dir.exists()
                && let Err(e) = std::fs::remove_dir_all(&dir)
            {
                log::warn!("Failed to clear {}: {}", dir.display(), e);
            }
        }

        Ok(ClearStats {
            entries_removed: count.max(0) as usize,
        })
    }

    /// Nuke the cache (delete index and all payloads)
    fn nuke(root: &Path) -> Result<()> {
        let db_path = root.join(INDEX_FILE);
        if db_path.exists() {
            std::fs::remove_file(&db_path)
                .map_err(|e| CacheError::Io(format!("Failed to remove cache index: {}", e)))?;
        }
        for category in Category::ALL {
            let dir = root.join(category.as_str());
            if dir.exists() {
                std::fs::remove_dir_all(&dir)
                    .map_err(|e| CacheError::Io(format!("Failed to remove {}: {}", dir.display(), e)))?;
            }
        }
        Ok(())
    }
}

/// Index metadata for one cached key
#[derive(Debug, Clone)]
pub struct EntryInfo {
    pub key: CacheKey,
    pub written_at: DateTime<Utc>,
    pub size_bytes: usize,
}

/// Statistics about cache clear operation
#[derive(Debug)]
pub struct ClearStats {
    pub entries_removed: usize,
}

/// Statistics about cache state
#[derive(Debug)]
pub struct CacheStats {
    pub total_entries: usize,
    pub total_size_bytes: usize,
    pub oldest_entry: Option<DateTime<Utc>>,
    pub newest_entry: Option<DateTime<Utc>>,
    pub per_category: Vec<(Category, usize)>,
}
