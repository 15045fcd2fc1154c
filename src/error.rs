use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, OrgaError>;

#[derive(Debug, Error)]
pub enum OrgaError {
    #[error("Storage fault: {0}")]
    StorageFault(#[from] rusqlite::Error),

    #[error("Storage fault: connection lock poisoned")]
    LockPoisoned,

    #[error("Storage fault: cannot create {}: {source}", .path.display())]
    StorageUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{namespace} not found: {key}")]
    NotFound { namespace: String, key: String },

    #[error("Corrupt {namespace} record {key}: {source}")]
    CorruptRecord {
        namespace: String,
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("{0} is not attached to a backend")]
    DetachedEntity(&'static str),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl OrgaError {
    pub(crate) fn not_found(namespace: &str, key: &str) -> Self {
        Self::NotFound {
            namespace: namespace.to_string(),
            key: key.to_string(),
        }
    }

    /// Returns true when the error reports a missing record.
    ///
    /// Callers use this to decide whether to fall back to creating default
    /// content instead of surfacing the failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns true for failures of the underlying database file.
    pub fn is_storage_fault(&self) -> bool {
        matches!(
            self,
            Self::StorageFault(_) | Self::LockPoisoned | Self::StorageUnavailable { .. }
        )
    }
}
