use std::path::PathBuf;

use anyhow::Context as _;
use tokio::io::AsyncWriteExt as _;
use uuid::Uuid;

use crate::domain::repository::ArtifactStore;
use crate::domain::types::StoredArtifact;
use crate::error::DesignsServiceError;

/// Public URL prefix the artifact root is mounted at.
pub const PUBLIC_PREFIX: &str = "/generated_images";

/// Writes decoded artifacts under `<root>/<user_id>/` with millisecond
/// timestamp names. Uniqueness under concurrency comes from create-new
/// file semantics: a same-millisecond run for the same user advances its
/// timestamp instead of clobbering the other run's file.
#[derive(Clone)]
pub struct FsArtifactStore {
    pub root: PathBuf,
}

impl ArtifactStore for FsArtifactStore {
    async fn store(
        &self,
        user_id: Uuid,
        bytes: &[u8],
    ) -> Result<StoredArtifact, DesignsServiceError> {
        let dir = self.root.join(user_id.to_string());
        tokio::fs::create_dir_all(&dir)
            .await
            .context("create artifact directory")?;

        let mut millis = chrono::Utc::now().timestamp_millis();
        loop {
            let file_name = format!("generated_image_{millis}.png");
            let path = dir.join(&file_name);
            match tokio::fs::OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&path)
                .await
            {
                Ok(mut file) => {
                    file.write_all(bytes).await.context("write artifact")?;
                    file.flush().await.context("flush artifact")?;
                    return Ok(StoredArtifact {
                        url: format!("{PUBLIC_PREFIX}/{user_id}/{file_name}"),
                        path,
                    });
                }
                Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => millis += 1,
                Err(e) => {
                    return Err(anyhow::Error::from(e)
                        .context("create artifact file")
                        .into());
                }
            }
        }
    }
}
