use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::common::response::ErrorResponse;

/// Failure taxonomy for the packaging pipeline. Every variant maps directly
/// onto the `{ error, details }` body returned to the caller; nothing is
/// retried and no partial output is cleaned up.
#[derive(Debug, Error)]
pub enum PackagingError {
    /// Upload was missing, empty, or the stream broke mid-transfer.
    #[error("invalid upload: {0}")]
    InvalidInput(String),

    /// Directory or file write failed outside the encoder itself.
    #[error("filesystem error: {0}")]
    Filesystem(String),

    /// Key generation or persistence failed for an encrypted job.
    #[error("encryption setup failed: {0}")]
    EncryptionSetup(String),

    /// The encoder exited nonzero or could not be launched. `details`
    /// carries the captured stderr verbatim.
    #[error("encoder failed: {details}")]
    Transcode { details: String },
}

impl PackagingError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            PackagingError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            PackagingError::Filesystem(_)
            | PackagingError::EncryptionSetup(_)
            | PackagingError::Transcode { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Fixed, kind-level message for the `error` field of the response.
    pub fn message(&self) -> &'static str {
        match self {
            PackagingError::InvalidInput(_) => "Invalid upload",
            PackagingError::Filesystem(_) => "Storage failure",
            PackagingError::EncryptionSetup(_) => "Encryption setup failed",
            PackagingError::Transcode { .. } => "FFmpeg processing failed",
        }
    }

    /// Inner diagnostic text (captured stderr for transcode failures).
    pub fn detail(&self) -> &str {
        match self {
            PackagingError::InvalidInput(d)
            | PackagingError::Filesystem(d)
            | PackagingError::EncryptionSetup(d) => d,
            PackagingError::Transcode { details } => details,
        }
    }
}

impl IntoResponse for PackagingError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse::new(self.message(), self.detail());
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_is_client_error() {
        let err = PackagingError::InvalidInput("no file field".into());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn transcode_failure_keeps_stderr_verbatim() {
        let stderr = "Invalid data found when processing input\n";
        let err = PackagingError::Transcode { details: stderr.into() };

        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message(), "FFmpeg processing failed");
        assert_eq!(err.detail(), stderr);
    }
}
