//! Stored file repository.

use sqlx::query_as;
use uuid::Uuid;

use ortus_core::interaction::{InteractionKind, fetch_all, fetch_first};
use ortus_core::result::ApiResult;
use ortus_entity::file::{CreateFile, StoredFile};
use ortus_entity::file::storage::{StorageProvider, TransferStatus};

use crate::connection::DatabasePool;

/// Repository for stored file metadata.
#[derive(Debug, Clone)]
pub struct FileRepository {
    db: DatabasePool,
}

impl FileRepository {
    /// Create a new file repository.
    pub fn new(db: DatabasePool) -> Self {
        Self { db }
    }

    /// Find a file by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> ApiResult<StoredFile> {
        fetch_first(
            query_as::<_, StoredFile>("SELECT * FROM files WHERE id = $1")
                .bind(id)
                .fetch_all(self.db.read()),
            InteractionKind::Default,
        )
        .await
    }

    /// List files that are mid-transfer between providers.
    pub async fn list_transcending(&self) -> ApiResult<Vec<StoredFile>> {
        fetch_all(
            query_as::<_, StoredFile>(
                "SELECT * FROM files WHERE transfer_status <> 'idle' ORDER BY updated_at DESC",
            )
            .fetch_all(self.db.read()),
        )
        .await
    }

    /// Register a new file.
    pub async fn create(&self, data: &CreateFile) -> ApiResult<StoredFile> {
        fetch_first(
            query_as::<_, StoredFile>(
                "INSERT INTO files \
                 (name, kind, content_type, size, ufs_key, blob_path, url, stored_in, \
                  target_storage, owner) \
                 VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
                 RETURNING *",
            )
            .bind(&data.name)
            .bind(data.kind)
            .bind(&data.content_type)
            .bind(data.size)
            .bind(&data.ufs_key)
            .bind(&data.blob_path)
            .bind(&data.url)
            .bind(data.stored_in)
            .bind(data.target_storage)
            .bind(&data.owner)
            .fetch_all(self.db.write()),
            InteractionKind::Sequential,
        )
        .await
    }

    /// Move a file into a transfer state towards the given target.
    ///
    /// Callers fetch the file first; the row is guaranteed to exist.
    pub async fn set_transfer(
        &self,
        id: Uuid,
        status: TransferStatus,
        target: StorageProvider,
    ) -> ApiResult<StoredFile> {
        fetch_first(
            query_as::<_, StoredFile>(
                "UPDATE files SET transfer_status = $2, target_storage = $3, updated_at = NOW() \
                 WHERE id = $1 RETURNING *",
            )
            .bind(id)
            .bind(status)
            .bind(target)
            .fetch_all(self.db.write()),
            InteractionKind::Sequential,
        )
        .await
    }

    /// Finish a transfer: the target provider becomes the current one and
    /// the file returns to idle.
    ///
    /// Callers fetch the file first; the row is guaranteed to exist.
    pub async fn finish_transfer(&self, id: Uuid) -> ApiResult<StoredFile> {
        fetch_first(
            query_as::<_, StoredFile>(
                "UPDATE files SET stored_in = target_storage, \
                                  transfer_status = 'idle', \
                                  updated_at = NOW() \
                 WHERE id = $1 RETURNING *",
            )
            .bind(id)
            .fetch_all(self.db.write()),
            InteractionKind::Sequential,
        )
        .await
    }
}
