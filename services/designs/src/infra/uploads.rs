use std::path::Path;

use anyhow::Context as _;
use tempfile::TempDir;

use crate::domain::types::RoomPhoto;
use crate::error::DesignsServiceError;

/// A raw uploaded file as read from the multipart request.
#[derive(Debug, Clone)]
pub struct UploadPart {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Uploaded room photos spooled into a per-run temp directory.
///
/// The directory (and every spooled file) is removed when this value
/// drops — success, validation failure, catalog miss, synthesis failure
/// and persistence failure all release through the same path.
pub struct TempUploads {
    dir: TempDir,
    photos: Vec<RoomPhoto>,
}

impl TempUploads {
    pub async fn spool(root: &Path, parts: Vec<UploadPart>) -> Result<Self, DesignsServiceError> {
        tokio::fs::create_dir_all(root)
            .await
            .context("create upload root")?;
        let dir = tempfile::Builder::new()
            .prefix("upload-")
            .tempdir_in(root)
            .context("create upload temp directory")?;

        let mut photos = Vec::with_capacity(parts.len());
        for (index, part) in parts.into_iter().enumerate() {
            // Spooled names are index-based; the client's file name is kept
            // only for the synthesis form, never trusted as a path.
            let path = dir.path().join(format!("part-{index}"));
            tokio::fs::write(&path, &part.bytes)
                .await
                .context("spool uploaded image")?;
            photos.push(RoomPhoto {
                path,
                file_name: part.file_name,
                content_type: part.content_type,
            });
        }
        Ok(Self { dir, photos })
    }

    pub fn photos(&self) -> &[RoomPhoto] {
        &self.photos
    }
}

impl std::fmt::Debug for TempUploads {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TempUploads")
            .field("dir", &self.dir.path())
            .field("photos", &self.photos.len())
            .finish()
    }
}
