//! Stored file model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use ortus_core::ApiError;

use super::kind::FileKind;
use super::storage::{StorageProvider, TransferStatus};

/// Metadata for a file whose bytes live with an external storage provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct StoredFile {
    /// Unique file identifier.
    pub id: Uuid,
    /// Original file name.
    pub name: String,
    /// What the file is used for.
    pub kind: FileKind,
    /// MIME content type.
    pub content_type: String,
    /// Size in bytes.
    pub size: i32,
    /// Provider key when stored in UploadThing.
    pub ufs_key: Option<String>,
    /// Provider path when stored in blob storage.
    pub blob_path: Option<String>,
    /// Public URL.
    pub url: String,
    /// Provider currently holding the bytes.
    pub stored_in: StorageProvider,
    /// Provider the bytes should end up in.
    pub target_storage: StorageProvider,
    /// Transfer progress between providers.
    pub transfer_status: TransferStatus,
    /// External auth subject of the uploader.
    pub owner: String,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last updated.
    pub updated_at: DateTime<Utc>,
}

impl StoredFile {
    /// Check whether the file is mid-transfer between providers.
    pub fn is_transcending(&self) -> bool {
        self.transfer_status != TransferStatus::Idle
    }

    /// Return the provider-specific key for the provider currently holding
    /// the bytes.
    ///
    /// A file whose current provider has no key on record cannot be
    /// addressed for transfer.
    pub fn provider_key(&self) -> Result<&str, ApiError> {
        let key = match self.stored_in {
            StorageProvider::Utfs => self.ufs_key.as_deref(),
            StorageProvider::Blob => self.blob_path.as_deref(),
        };
        key.ok_or_else(|| {
            ApiError::provider_identification(format!(
                "File {} has no key for provider '{}'",
                self.id, self.stored_in
            ))
        })
    }
}

/// Data required to register a new stored file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFile {
    /// Original file name.
    pub name: String,
    /// What the file is used for.
    pub kind: FileKind,
    /// MIME content type.
    pub content_type: String,
    /// Size in bytes.
    pub size: i32,
    /// Provider key when stored in UploadThing.
    pub ufs_key: Option<String>,
    /// Provider path when stored in blob storage.
    pub blob_path: Option<String>,
    /// Public URL.
    pub url: String,
    /// Provider currently holding the bytes.
    pub stored_in: StorageProvider,
    /// Provider the bytes should end up in.
    pub target_storage: StorageProvider,
    /// External auth subject of the uploader.
    pub owner: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use ortus_core::ErrorDetail;

    fn file() -> StoredFile {
        StoredFile {
            id: Uuid::new_v4(),
            name: "logo.png".to_string(),
            kind: FileKind::Logo,
            content_type: "image/png".to_string(),
            size: 1024,
            ufs_key: Some("ufs-abc".to_string()),
            blob_path: None,
            url: "https://cdn.example.org/logo.png".to_string(),
            stored_in: StorageProvider::Utfs,
            target_storage: StorageProvider::Blob,
            transfer_status: TransferStatus::Idle,
            owner: "user_123".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_transcending_tracks_transfer_status() {
        let mut f = file();
        assert!(!f.is_transcending());
        f.transfer_status = TransferStatus::Queued;
        assert!(f.is_transcending());
    }

    #[test]
    fn test_provider_key_follows_current_provider() {
        let f = file();
        assert_eq!(f.provider_key().unwrap(), "ufs-abc");

        let mut moved = file();
        moved.stored_in = StorageProvider::Blob;
        let err = moved.provider_key().unwrap_err();
        assert_eq!(err.detail, ErrorDetail::IncompleteProviderIdentification);
    }
}
