use std::path::{Path, PathBuf};

use rand::TryRngCore;
use rand::rngs::OsRng;
use tracing::info;

use super::error::PackagingError;

pub const KEY_FILENAME: &str = "enc.key";
pub const KEY_INFO_FILENAME: &str = "key_info.txt";

/// AES-128 key material provisioned for one encrypted HLS job.
///
/// Both files land inside the job's output directory, which is served from
/// the same public tree as the manifest the key protects: anyone who can
/// fetch the playlist can fetch the key. Known, accepted exposure.
#[derive(Debug)]
pub struct EncryptionKey {
    pub key_path: PathBuf,
    pub key_info_path: PathBuf,
    pub key_uri: String,
    pub hex_key: String,
}

impl EncryptionKey {
    /// Generate a fresh 128-bit key from the OS CSPRNG and persist it
    /// together with the 3-line key-info descriptor the encoder consumes:
    /// key URI, local key path, hex-encoded key.
    pub async fn provision(output_dir: &Path, key_uri: String) -> Result<Self, PackagingError> {
        let mut key = [0u8; 16];
        OsRng.try_fill_bytes(&mut key).map_err(|e| {
            PackagingError::EncryptionSetup(format!("key generation failed: {}", e))
        })?;
        let hex_key = hex::encode(key);

        let key_path = output_dir.join(KEY_FILENAME);
        tokio::fs::write(&key_path, &hex_key).await.map_err(|e| {
            PackagingError::EncryptionSetup(format!(
                "failed to write {}: {}",
                key_path.display(),
                e
            ))
        })?;

        let descriptor = format!("{}\n{}\n{}", key_uri, key_path.display(), hex_key);
        let key_info_path = output_dir.join(KEY_INFO_FILENAME);
        tokio::fs::write(&key_info_path, descriptor).await.map_err(|e| {
            PackagingError::EncryptionSetup(format!(
                "failed to write {}: {}",
                key_info_path.display(),
                e
            ))
        })?;

        info!("Provisioned AES-128 key under {}", output_dir.display());

        Ok(Self {
            key_path,
            key_info_path,
            key_uri,
            hex_key,
        })
    }
}
