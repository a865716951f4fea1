//! File service — metadata reads and the provider transfer lifecycle.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use ortus_core::error::ApiError;
use ortus_core::response::{ApiResponse, PartialReason};
use ortus_core::result::ApiResult;
use ortus_database::repositories::FileRepository;
use ortus_entity::file::{CreateFile, StorageProvider, StoredFile, TransferStatus};

use crate::viewer::Viewer;

/// Handles stored file reads and transfers between storage providers.
#[derive(Debug, Clone)]
pub struct FileService {
    /// File repository.
    files: Arc<FileRepository>,
}

impl FileService {
    /// Creates a new file service.
    pub fn new(files: Arc<FileRepository>) -> Self {
        Self { files }
    }

    /// Gets file metadata.
    pub async fn get_file(&self, id: Uuid) -> ApiResult<StoredFile> {
        self.files.find_by_id(id).await
    }

    /// Lists files that are mid-transfer between providers.
    pub async fn list_transcending(&self, viewer: &Viewer) -> ApiResult<Vec<StoredFile>> {
        if !viewer.can_moderate() {
            return Err(ApiError::authorisation(
                "Listing transfers requires admin access",
            ));
        }
        self.files.list_transcending().await
    }

    /// Registers a file whose bytes already live with a provider.
    ///
    /// The record must be addressable at its current provider from the
    /// start; a registration without the matching key is rejected rather
    /// than left as a row no transfer can ever pick up.
    pub async fn register_file(&self, input: CreateFile, viewer: &Viewer) -> ApiResult<StoredFile> {
        if !viewer.can_moderate() {
            return Err(ApiError::authorisation(
                "Registering files requires admin access",
            ));
        }

        let addressable = match input.stored_in {
            StorageProvider::Utfs => input.ufs_key.is_some(),
            StorageProvider::Blob => input.blob_path.is_some(),
        };
        if !addressable {
            return Err(ApiError::provider_identification(format!(
                "Registration carries no key for provider '{}'",
                input.stored_in
            )));
        }

        let created = self.files.create(&input).await?;
        info!(name = %input.name, provider = %input.stored_in, "File registered");
        Ok(created)
    }

    /// Queues a file for transfer to the given provider.
    ///
    /// The file must be addressable at its current provider and must not
    /// already be mid-transfer. Queuing a file that already lives at the
    /// target changes nothing.
    pub async fn begin_transfer(
        &self,
        id: Uuid,
        target: StorageProvider,
        viewer: &Viewer,
    ) -> ApiResult<StoredFile> {
        let file = match self.files.find_by_id(id).await? {
            ApiResponse::Success { data, .. } => data,
            other => return Ok(other),
        };

        if !viewer.owns(&file.owner) && !viewer.can_moderate() {
            return Err(ApiError::invalid_ownership(
                "Only the file owner or an admin may transfer it",
            ));
        }

        if file.is_transcending() {
            return Err(ApiError::data_transcending(format!(
                "File {id} is already being transferred"
            )));
        }

        if file.stored_in == target {
            return Ok(ApiResponse::inconsequential_with(
                file,
                "File already lives in the target storage",
            ));
        }

        file.provider_key()?;

        let queued = self
            .files
            .set_transfer(id, TransferStatus::Queued, target)
            .await?;
        info!(file_id = %id, target = %target, "File transfer queued");
        Ok(queued)
    }

    /// Completes a transfer: the target provider becomes current and the
    /// file returns to idle. The source copy still awaits cleanup, so the
    /// result is flagged as post-completion.
    pub async fn complete_transfer(&self, id: Uuid, viewer: &Viewer) -> ApiResult<StoredFile> {
        if !viewer.can_moderate() {
            return Err(ApiError::authorisation(
                "Completing transfers requires admin access",
            ));
        }

        let file = match self.files.find_by_id(id).await? {
            ApiResponse::Success { data, .. } => data,
            other => return Ok(other),
        };

        if !file.is_transcending() {
            return Ok(ApiResponse::inconsequential_with(
                file,
                "No transfer in progress",
            ));
        }

        let finished = self
            .files
            .finish_transfer(id)
            .await?
            .require_data("transfer completion")?;
        info!(file_id = %id, provider = %finished.stored_in, "File transfer completed");

        Ok(ApiResponse::partial(
            finished,
            PartialReason::PostCompletion,
            "Transfer complete; source copy pending cleanup",
        ))
    }
}
