use thiserror::Error;

/// Errors raised while reading or writing the cart snapshot.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PersistenceError {
    #[error("Storage I/O error: {0}")]
    Io(String),
    #[error("Snapshot serialization error: {0}")]
    Serialization(String),
    #[error("Storage lock poisoned during {0}")]
    LockPoisoned(&'static str),
}

impl From<std::io::Error> for PersistenceError {
    fn from(error: std::io::Error) -> Self {
        PersistenceError::Io(error.to_string())
    }
}

impl From<serde_json::Error> for PersistenceError {
    fn from(error: serde_json::Error) -> Self {
        PersistenceError::Serialization(error.to_string())
    }
}
