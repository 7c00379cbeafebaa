//! Résumé upload

use std::path::Path;

use log::debug;

use super::error::ImportError;
use crate::api::{HuntflowClient, RemoteId};

/// Ids produced by uploading a résumé
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UploadedFile {
    pub file_id: Option<RemoteId>,
    /// Photo the server extracted from the document
    pub photo_id: Option<RemoteId>,
}

/// Upload the résumé at `path`, if there is one
///
/// Without a path nothing is sent and both ids stay empty.
pub async fn upload(
    client: &HuntflowClient,
    account_id: RemoteId,
    path: Option<&Path>,
) -> Result<UploadedFile, ImportError> {
    let Some(path) = path else {
        return Ok(UploadedFile::default());
    };

    let response = client
        .upload_file(account_id, path)
        .await
        .map_err(ImportError::Upload)?;

    let uploaded = UploadedFile {
        file_id: Some(response.id),
        photo_id: response.photo.map(|photo| photo.id),
    };
    debug!("Uploaded {} as {:?}", path.display(), uploaded);

    Ok(uploaded)
}
