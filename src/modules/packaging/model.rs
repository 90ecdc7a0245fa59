use std::path::PathBuf;

use uuid::Uuid;

/// Output packaging variant for a job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamFormat {
    Hls,
    HlsEncrypted,
    Dash,
}

impl StreamFormat {
    /// Manifest filename produced inside the job's output directory.
    pub fn manifest_name(&self) -> &'static str {
        match self {
            StreamFormat::Hls | StreamFormat::HlsEncrypted => "package.m3u8",
            StreamFormat::Dash => "package.mpd",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobStatus {
    Created,
    Encoding,
    Succeeded,
    Failed,
}

/// One conversion job. Owns its upload file and output directory
/// exclusively; identifiers are generated fresh per request, so
/// resubmitting the same bytes yields an unrelated job.
#[derive(Debug)]
pub struct Job {
    pub id: Uuid,
    pub input_path: PathBuf,
    pub output_dir: PathBuf,
    pub format: StreamFormat,
    pub status: JobStatus,
    pub error: Option<String>,
}

impl Job {
    pub fn new(id: Uuid, input_path: PathBuf, output_dir: PathBuf, format: StreamFormat) -> Self {
        Self {
            id,
            input_path,
            output_dir,
            format,
            status: JobStatus::Created,
            error: None,
        }
    }

    /// Terminal failure. `Succeeded` and `Failed` have no outgoing
    /// transitions; there is no retry.
    pub fn fail(&mut self, detail: impl Into<String>) {
        self.status = JobStatus::Failed;
        self.error = Some(detail.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_name_matches_variant() {
        assert_eq!(StreamFormat::Hls.manifest_name(), "package.m3u8");
        assert_eq!(StreamFormat::HlsEncrypted.manifest_name(), "package.m3u8");
        assert_eq!(StreamFormat::Dash.manifest_name(), "package.mpd");
    }

    #[test]
    fn new_job_starts_created_without_error() {
        let job = Job::new(
            Uuid::new_v4(),
            PathBuf::from("uploads/a.mp4"),
            PathBuf::from("processed/a"),
            StreamFormat::Hls,
        );
        assert_eq!(job.status, JobStatus::Created);
        assert!(job.error.is_none());
    }

    #[test]
    fn fail_records_detail() {
        let mut job = Job::new(
            Uuid::new_v4(),
            PathBuf::from("uploads/a.mp4"),
            PathBuf::from("processed/a"),
            StreamFormat::Dash,
        );
        job.fail("encoder blew up");
        assert_eq!(job.status, JobStatus::Failed);
        assert_eq!(job.error.as_deref(), Some("encoder blew up"));
    }
}
