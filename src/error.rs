use thiserror::Error;

use crate::storage::StorageError;
use crate::transport::TransportError;

/// Errors surfaced by [`LocaleService`](crate::LocaleService) operations
#[derive(Error, Debug)]
pub enum LocaleError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Failure to serialize a fetched payload before caching it
    #[error("Failed to serialize locale data: {0}")]
    Serialize(#[from] serde_json::Error),
}
