use std::io;
use std::path::PathBuf;

use tracing::info;

use crate::config::settings::AppConfig;

/// Filesystem roots for uploads and processed artifacts.
///
/// The processed root is also mounted for static serving, so everything a
/// job writes beneath its directory becomes externally retrievable.
#[derive(Clone, Debug)]
pub struct StorageDirs {
    pub upload_root: PathBuf,
    pub processed_root: PathBuf,
}

impl StorageDirs {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            upload_root: PathBuf::from(&config.upload_dir),
            processed_root: PathBuf::from(&config.processed_dir),
        }
    }

    /// Create both roots. Runs once at startup; already-existing directories
    /// are not an error.
    pub fn bootstrap(&self) -> io::Result<()> {
        std::fs::create_dir_all(&self.upload_root)?;
        std::fs::create_dir_all(&self.processed_root)?;

        info!(
            "Storage ready: uploads={} processed={}",
            self.upload_root.display(),
            self.processed_root.display()
        );

        Ok(())
    }

    /// Location for an ingested upload file.
    pub fn upload_path(&self, file_name: &str) -> PathBuf {
        self.upload_root.join(file_name)
    }

    /// Exclusive output directory for one job.
    pub fn job_dir(&self, job: &str) -> PathBuf {
        self.processed_root.join(job)
    }
}
