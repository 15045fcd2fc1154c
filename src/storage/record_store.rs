use crate::error::{OrgaError, Result};
use rusqlite::{params, Connection, OptionalExtension};
use serde::{de::DeserializeOwned, ser::Error as _, Serialize};
use std::sync::{Arc, Mutex, MutexGuard};

/// Rejects NaN and infinities, which JSON cannot represent.
///
/// `serde_json` writes them as `null`, which then fails to decode as `f64`
/// and poisons every scan of the namespace.
pub(crate) fn ensure_finite(field: &str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(OrgaError::SerializationError(serde_json::Error::custom(
            format!("{} must be finite, got {}", field, value),
        )))
    }
}

/// A namespaced map from string key to a JSON record.
///
/// Every namespace is one table in the shared database file, so records of
/// different entity types never collide while still living in one file.
#[derive(Clone)]
pub struct RecordStore {
    namespace: &'static str,
    conn: Arc<Mutex<Connection>>,
}

impl RecordStore {
    pub fn new(namespace: &'static str, conn: Arc<Mutex<Connection>>) -> Self {
        Self { namespace, conn }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| OrgaError::LockPoisoned)
    }

    /// Creates the namespace if it does not exist yet
    pub fn init(&self) -> Result<()> {
        let conn = self.lock()?;
        conn.execute_batch(&format!(
            "CREATE TABLE IF NOT EXISTS \"{}\" (
                key   TEXT PRIMARY KEY NOT NULL,
                value TEXT NOT NULL
            )",
            self.namespace
        ))?;
        Ok(())
    }

    /// Decodes the record stored under `key`
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<T> {
        let raw: Option<String> = {
            let conn = self.lock()?;
            let raw = conn
                .query_row(
                    &format!("SELECT value FROM \"{}\" WHERE key = ?1", self.namespace),
                    params![key],
                    |row| row.get(0),
                )
                .optional()?;
            raw
        };

        let raw = raw.ok_or_else(|| OrgaError::not_found(self.namespace, key))?;
        serde_json::from_str(&raw).map_err(|source| {
            tracing::warn!(namespace = self.namespace, key, error = %source, "corrupt record");
            OrgaError::CorruptRecord {
                namespace: self.namespace.to_string(),
                key: key.to_string(),
                source,
            }
        })
    }

    /// Stores `value` under `key`, replacing any previous record.
    ///
    /// A replaced record keeps its original position in `list_keys`.
    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        let json = serde_json::to_string(value)?;
        let conn = self.lock()?;
        conn.execute(
            &format!(
                "INSERT INTO \"{}\" (key, value) VALUES (?1, ?2)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value",
                self.namespace
            ),
            params![key, json],
        )?;
        Ok(())
    }

    /// Removes `key`; removing an absent key succeeds
    pub fn delete(&self, key: &str) -> Result<()> {
        let conn = self.lock()?;
        conn.execute(
            &format!("DELETE FROM \"{}\" WHERE key = ?1", self.namespace),
            params![key],
        )?;
        Ok(())
    }

    /// All keys of the namespace, in insertion order
    pub fn list_keys(&self) -> Result<Vec<String>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT key FROM \"{}\" ORDER BY rowid",
            self.namespace
        ))?;
        let keys = stmt
            .query_map([], |row| row.get(0))?
            .collect::<std::result::Result<Vec<String>, _>>()?;
        Ok(keys)
    }

    /// Decodes every record of the namespace whose decoded value satisfies `keep`.
    ///
    /// This is a full scan; parent-scoped listing is built on it.
    pub fn scan<T, F>(&self, mut keep: F) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
        F: FnMut(&T) -> bool,
    {
        let mut out = Vec::new();
        for key in self.list_keys()? {
            let record: T = self.get(&key)?;
            if keep(&record) {
                out.push(record);
            }
        }
        Ok(out)
    }
}
