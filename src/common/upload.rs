use axum::extract::multipart::Field;
use futures_util::StreamExt;
use std::path::Path;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tracing::error;

use crate::modules::packaging::error::PackagingError;

/// Stream a multipart field to disk in full, returning the byte count.
///
/// An empty or interrupted stream is rejected; whatever was already written
/// stays on disk for inspection.
pub async fn save_field_to_disk(mut field: Field<'_>, dest: &Path) -> Result<u64, PackagingError> {
    let mut file = File::create(dest).await.map_err(|e| {
        PackagingError::Filesystem(format!("failed to create {}: {}", dest.display(), e))
    })?;

    let mut written: u64 = 0;
    while let Some(chunk) = field.next().await {
        let chunk = match chunk {
            Ok(c) => c,
            Err(e) => {
                error!("Upload stream error: {}", e);
                return Err(PackagingError::InvalidInput(
                    "upload stream interrupted".to_string(),
                ));
            }
        };

        file.write_all(&chunk).await.map_err(|e| {
            PackagingError::Filesystem(format!("failed to write {}: {}", dest.display(), e))
        })?;
        written += chunk.len() as u64;
    }

    file.flush().await.map_err(|e| {
        PackagingError::Filesystem(format!("failed to flush {}: {}", dest.display(), e))
    })?;

    if written == 0 {
        return Err(PackagingError::InvalidInput(
            "uploaded file is empty".to_string(),
        ));
    }

    Ok(written)
}
