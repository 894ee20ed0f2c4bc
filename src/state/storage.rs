use rusqlite::{Connection, OptionalExtension};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::StorageError;

/// Key/value string storage, the desktop counterpart of browser local storage.
///
/// Values are stored and returned verbatim; encoding is up to the caller.
pub trait Persistence {
    /// Read the value stored under `key`, or `None` if nothing is stored
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite the value stored under `key`
    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// SQLite-backed key/value store kept in the user's data directory.
pub struct SqliteStore {
    conn: Connection,
    db_path: PathBuf,
}

impl SqliteStore {
    /// Open (or create) the store inside `data_dir`.
    ///
    /// The database file is `outfit_catalog.db` in that directory, e.g.
    /// - Linux: ~/.local/share/outfit-catalog/outfit_catalog.db
    /// - macOS: ~/Library/Application Support/outfit-catalog/outfit_catalog.db
    /// - Windows: %APPDATA%\outfit-catalog\outfit_catalog.db
    pub fn open(data_dir: &Path) -> Result<Self, StorageError> {
        std::fs::create_dir_all(data_dir)?;

        let db_path = data_dir.join("outfit_catalog.db");
        let conn = Connection::open(&db_path)?;

        log::debug!("📁 Store opened at: {}", db_path.display());

        let store = SqliteStore { conn, db_path };
        store.init_schema()?;

        Ok(store)
    }

    /// Default data directory: `<user data dir>/outfit-catalog`
    pub fn default_dir() -> Result<PathBuf, StorageError> {
        let mut path = dirs::data_dir()
            .or_else(dirs::home_dir)
            .ok_or(StorageError::NoDataDir)?;

        path.push("outfit-catalog");
        Ok(path)
    }

    /// Create the key/value table if it doesn't exist
    fn init_schema(&self) -> Result<(), StorageError> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS kv (
                key     TEXT PRIMARY KEY,
                value   TEXT NOT NULL
            )",
            [],
        )?;

        Ok(())
    }

    /// Get the path to the database file
    pub fn path(&self) -> &Path {
        &self.db_path
    }
}

impl Persistence for SqliteStore {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", [key], |row| row.get(0))
            .optional()?;

        Ok(value)
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            [key, value],
        )?;

        Ok(())
    }
}

impl std::fmt::Debug for SqliteStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteStore")
            .field("db_path", &self.db_path)
            .finish()
    }
}

/// In-memory store. Anything saved here is lost when the app exits.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Persistence for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Open the SQLite store in `data_dir`, falling back to memory if that fails.
pub fn open_or_memory(data_dir: Option<&Path>) -> Box<dyn Persistence> {
    let result = match data_dir {
        Some(dir) => SqliteStore::open(dir),
        None => SqliteStore::default_dir().and_then(|dir| SqliteStore::open(&dir)),
    };

    match result {
        Ok(store) => {
            log::info!("✅ Favorites stored in {}", store.path().display());
            Box::new(store)
        }
        Err(e) => {
            log::warn!("⚠️  Favorites storage unavailable, keeping them for this session only: {}", e);
            Box::new(MemoryStore::new())
        }
    }
}
