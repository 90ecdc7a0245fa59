use serde::Serialize;
use utoipa::ToSchema;

/// Failure body returned by every conversion endpoint: a fixed, kind-level
/// message plus the diagnostic detail (captured encoder stderr for
/// transcode failures).
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub details: String,
}

impl ErrorResponse {
    pub fn new(error: &str, details: impl Into<String>) -> Self {
        Self {
            error: error.to_string(),
            details: details.into(),
        }
    }
}
