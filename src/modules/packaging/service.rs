use axum::extract::multipart::Field;
use tracing::{error, info};
use uuid::Uuid;

use crate::common::upload;
use crate::state::AppState;

use super::encoder::{EncoderCommand, encoder_args};
use super::error::PackagingError;
use super::keys::{EncryptionKey, KEY_FILENAME};
use super::model::{Job, JobStatus, StreamFormat};

pub struct PackagingService;

impl PackagingService {
    /// Run one upload through the full pipeline and return the manifest URL.
    ///
    /// The caller's task blocks for the whole encode, potentially minutes
    /// for large inputs. Concurrent submissions each spawn their own
    /// encoder process; the only bound is host resources.
    pub async fn submit(
        state: AppState,
        field: Field<'_>,
        format: StreamFormat,
        base_url: &str,
    ) -> Result<String, PackagingError> {
        let job = Self::ingest(&state, field, format).await?;
        Self::process(&state, job, base_url).await
    }

    /// Persist the uploaded stream under a fresh job id, preserving the
    /// original file extension, and create the job's output directory.
    ///
    /// No content validation happens here; a malformed upload is only
    /// detected later when the encoder rejects it.
    async fn ingest(
        state: &AppState,
        field: Field<'_>,
        format: StreamFormat,
    ) -> Result<Job, PackagingError> {
        let id = Uuid::new_v4();
        let file_name = field.file_name().unwrap_or("video.mp4").to_string();
        let ext = std::path::Path::new(&file_name)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("mp4");

        let input_path = state.storage.upload_path(&format!("{}.{}", id, ext));
        let written = upload::save_field_to_disk(field, &input_path).await?;
        info!("Ingested {} ({} bytes) as job {}", file_name, written, id);

        // Output directory name is the upload filename minus its extension.
        // It must exist before the encoder runs, even if the encode then
        // fails; create_dir_all tolerates a concurrent create.
        let output_dir = state.storage.job_dir(&id.to_string());
        tokio::fs::create_dir_all(&output_dir).await.map_err(|e| {
            PackagingError::Filesystem(format!(
                "failed to create {}: {}",
                output_dir.display(),
                e
            ))
        })?;

        Ok(Job::new(id, input_path, output_dir, format))
    }

    /// Drive a created job to a terminal state: key provisioning for the
    /// encrypted variant, then the encode, then the result URL. Partial
    /// output from a failed encode is left in place for inspection.
    pub async fn process(
        state: &AppState,
        mut job: Job,
        base_url: &str,
    ) -> Result<String, PackagingError> {
        let manifest_path = job.output_dir.join(job.format.manifest_name());

        let key_info = match job.format {
            StreamFormat::HlsEncrypted => {
                let key_uri = Self::artifact_url(base_url, &job.id.to_string(), KEY_FILENAME);
                let key = EncryptionKey::provision(&job.output_dir, key_uri).await?;
                Some(key.key_info_path)
            }
            _ => None,
        };

        job.status = JobStatus::Encoding;
        info!("Encoding job {} ({:?})", job.id, job.format);

        let args = encoder_args(job.format, &job.input_path, &manifest_path, key_info.as_deref());
        let result = EncoderCommand::new(&state.config.ffmpeg_path)
            .args(args)
            .execute()
            .await;

        match result {
            Ok(_) => {
                job.status = JobStatus::Succeeded;
                info!("Job {} succeeded", job.id);
                Ok(Self::artifact_url(
                    base_url,
                    &job.id.to_string(),
                    job.format.manifest_name(),
                ))
            }
            Err(e) => {
                job.fail(e.detail().to_string());
                error!("Job {} failed: {}", job.id, e);
                Err(e)
            }
        }
    }

    /// Compose the externally reachable URL for a file under a job's
    /// processed directory. Pure; trusts the encoder's success signal and
    /// performs no existence check.
    pub fn artifact_url(base_url: &str, job: &str, file_name: &str) -> String {
        format!(
            "{}/processed/{}/{}",
            base_url.trim_end_matches('/'),
            job,
            file_name
        )
    }
}
