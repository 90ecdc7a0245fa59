use std::path::{Path, PathBuf};
use std::time::Duration;

use tokio::process::Command;
use tracing::info;

use super::error::PackagingError;
use super::model::StreamFormat;

/// Captured output of one encoder run.
#[derive(Debug)]
pub struct EncoderOutput {
    pub stdout: String,
    pub stderr: String,
}

/// One external encoder invocation.
///
/// Runs the process to completion, capturing stdout and stderr in full, and
/// maps a nonzero exit status to [`PackagingError::Transcode`] carrying the
/// stderr text untouched. The timeout is optional and the packaging flow
/// leaves it unset, so by default the invocation blocks until the encoder
/// exits.
#[derive(Debug, Clone)]
pub struct EncoderCommand {
    program: PathBuf,
    args: Vec<String>,
    timeout: Option<Duration>,
}

impl EncoderCommand {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            timeout: None,
        }
    }

    pub fn args(mut self, iter: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.args.extend(iter.into_iter().map(Into::into));
        self
    }

    /// Cap the execution time. Left unset by the conversion endpoints.
    pub fn timeout(mut self, limit: Duration) -> Self {
        self.timeout = Some(limit);
        self
    }

    pub async fn execute(&self) -> Result<EncoderOutput, PackagingError> {
        info!("Running {} {}", self.program.display(), self.args.join(" "));

        let output_fut = Command::new(&self.program)
            .args(&self.args)
            .stdout(std::process::Stdio::piped())
            .stderr(std::process::Stdio::piped())
            .output();

        let output = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, output_fut).await.map_err(|_| {
                PackagingError::Transcode {
                    details: format!("encoder timed out after {:?}", limit),
                }
            })?,
            None => output_fut.await,
        };

        let output = output.map_err(|e| PackagingError::Transcode {
            details: format!("failed to launch {}: {}", self.program.display(), e),
        })?;

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        if !output.status.success() {
            return Err(PackagingError::Transcode { details: stderr });
        }

        Ok(EncoderOutput { stdout, stderr })
    }
}

/// ffmpeg argument list for one job, by variant.
///
/// The parameter sets are compatibility contracts: H.264/AAC with 10-second
/// VOD segments for HLS (plus the key-info descriptor when encrypting),
/// VP9/AAC for DASH.
pub fn encoder_args(
    format: StreamFormat,
    input: &Path,
    manifest: &Path,
    key_info: Option<&Path>,
) -> Vec<String> {
    let mut args: Vec<String> = vec!["-i".into(), input.display().to_string()];

    match format {
        StreamFormat::Hls | StreamFormat::HlsEncrypted => {
            args.extend([
                "-c:v".to_string(),
                "libx264".to_string(),
                "-c:a".to_string(),
                "aac".to_string(),
                "-hls_time".to_string(),
                "10".to_string(),
                "-hls_playlist_type".to_string(),
                "vod".to_string(),
            ]);
            if let Some(key_info) = key_info {
                args.extend([
                    "-hls_key_info_file".to_string(),
                    key_info.display().to_string(),
                ]);
            }
            args.extend(["-f".to_string(), "hls".to_string()]);
        }
        StreamFormat::Dash => {
            args.extend([
                "-c:v".to_string(),
                "libvpx-vp9".to_string(),
                "-c:a".to_string(),
                "aac".to_string(),
                "-f".to_string(),
                "dash".to_string(),
            ]);
        }
    }

    args.push(manifest.display().to_string());
    args
}
