//! Storage provider and transfer status enumerations.

use std::fmt;

use serde::{Deserialize, Serialize};

/// External storage provider holding a file's bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "storage_provider", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum StorageProvider {
    /// UploadThing file storage.
    Utfs,
    /// Blob object storage.
    Blob,
}

impl StorageProvider {
    /// Return the provider as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Utfs => "utfs",
            Self::Blob => "blob",
        }
    }
}

impl fmt::Display for StorageProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Progress of a file transfer between storage providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "transfer_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum TransferStatus {
    /// No transfer in progress.
    Idle,
    /// Transfer is queued.
    Queued,
    /// Transfer is running.
    InProgress,
}

impl TransferStatus {
    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Queued => "queued",
            Self::InProgress => "in_progress",
        }
    }
}

impl fmt::Display for TransferStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
