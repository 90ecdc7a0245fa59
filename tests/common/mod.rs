//! Shared harness for integration tests.
//!
//! Builds a full [`AppState`] on top of temp upload/processed roots with a
//! configurable encoder binary, plus helpers for hand-rolled multipart
//! requests driven through the router with `tower::ServiceExt::oneshot`.

use std::path::{Path, PathBuf};

use axum::Router;
use axum::body::Body;
use axum::http::Request;
use http_body_util::BodyExt;
use tempfile::TempDir;

use streampack::app::create_app;
use streampack::config::settings::AppConfig;
use streampack::infrastructure::storage::local::StorageDirs;
use streampack::state::AppState;

pub const BOUNDARY: &str = "x-test-boundary-7MA4YWxkTrZu0gW";

/// Stub encoder that creates the manifest file it was asked for (the last
/// argument) and exits zero.
#[cfg(unix)]
pub const TOUCH_MANIFEST_SCRIPT: &str = "#!/bin/sh\nfor last; do :; done\n: > \"$last\"\n";

/// Stub encoder that writes a diagnostic to stderr and exits nonzero.
#[cfg(unix)]
pub const FAILING_SCRIPT: &str = "#!/bin/sh\nprintf 'boom: bad input\\n' >&2\nexit 1\n";

pub struct TestHarness {
    pub root: TempDir,
    pub state: AppState,
}

impl TestHarness {
    /// Harness whose packaging pipeline shells out to `encoder` instead of
    /// the real ffmpeg.
    pub fn with_encoder(encoder: &str) -> (Self, Router) {
        Self::build(TempDir::new().expect("failed to create temp root"), encoder)
    }

    /// Harness using an executable shell script as the encoder, written
    /// into the harness root.
    #[cfg(unix)]
    pub fn with_encoder_script(script: &str) -> (Self, Router) {
        let root = TempDir::new().expect("failed to create temp root");
        let stub = write_stub_encoder(root.path(), script);
        Self::build(root, &stub.to_string_lossy())
    }

    fn build(root: TempDir, encoder: &str) -> (Self, Router) {
        let config = AppConfig {
            server_port: 0,
            upload_dir: root.path().join("uploads").to_string_lossy().into_owned(),
            processed_dir: root.path().join("processed").to_string_lossy().into_owned(),
            ffmpeg_path: encoder.to_string(),
            public_base_url: None,
        };

        let storage = StorageDirs::new(&config);
        storage.bootstrap().expect("bootstrap failed");

        let state = AppState::new(config, storage);
        let app = create_app(state.clone());

        (Self { root, state }, app)
    }

    /// Entries of the processed root, one per job that got as far as
    /// directory creation.
    pub fn job_dirs(&self) -> Vec<PathBuf> {
        let mut dirs: Vec<PathBuf> = std::fs::read_dir(&self.state.storage.processed_root)
            .expect("read processed root")
            .map(|e| e.unwrap().path())
            .collect();
        dirs.sort();
        dirs
    }
}

/// Write an executable shell script to act as the encoder.
#[cfg(unix)]
pub fn write_stub_encoder(dir: &Path, script: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join("fake-ffmpeg");
    std::fs::write(&path, script).expect("failed to write stub encoder");
    let mut perms = std::fs::metadata(&path).expect("stat stub").permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&path, perms).expect("chmod stub");
    path
}

/// Multipart body with a single file part.
pub fn multipart_body(field_name: &str, file_name: &str, content: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
            field_name, file_name
        )
        .as_bytes(),
    );
    body.extend_from_slice(b"Content-Type: video/mp4\r\n\r\n");
    body.extend_from_slice(content);
    body.extend_from_slice(format!("\r\n--{}--\r\n", BOUNDARY).as_bytes());
    body
}

pub fn post_multipart(uri: &str, body: Vec<u8>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("host", "localhost:3000")
        .header(
            "content-type",
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(body))
        .unwrap()
}

pub async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("response body was not JSON")
}
