use serde::Deserialize;
use crate::config::env::{self, EnvKey};

/// Process-wide configuration, resolved once at startup and passed down
/// through `AppState`. Every key has a default, so construction never fails.
#[derive(Clone, Debug, Deserialize)]
pub struct AppConfig {
    pub server_port: u16,
    pub upload_dir: String,
    pub processed_dir: String,
    pub ffmpeg_path: String,
    /// External base address used in result URLs. When unset, the address is
    /// derived per-request from the Host header.
    pub public_base_url: Option<String>,
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            server_port: env::get_parsed(EnvKey::ServerPort, 3000),
            upload_dir: env::get_or(EnvKey::UploadDir, "uploads"),
            processed_dir: env::get_or(EnvKey::ProcessedDir, "processed"),
            ffmpeg_path: env::get_or(EnvKey::FfmpegPath, "ffmpeg"),
            public_base_url: env::get(EnvKey::PublicBaseUrl).ok(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}
