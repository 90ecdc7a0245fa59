use axum::Json;
use axum::extract::{Multipart, State};
use axum::response::IntoResponse;
use axum_extra::extract::Host;
use tracing::info;

use crate::state::AppState;

use super::dto::{DashUrlResponse, EncryptedHlsUrlResponse, HlsUrlResponse};
use super::error::PackagingError;
use super::model::StreamFormat;
use super::service::PackagingService;

#[utoipa::path(
    post,
    path = "/convert_to_hls",
    request_body(content = String, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Conversion succeeded", body = HlsUrlResponse),
        (status = 400, description = "Missing or empty upload", body = crate::common::response::ErrorResponse),
        (status = 500, description = "Conversion failed", body = crate::common::response::ErrorResponse)
    ),
    tag = "Packaging"
)]
pub async fn convert_to_hls(
    State(state): State<AppState>,
    Host(host): Host,
    multipart: Multipart,
) -> impl IntoResponse {
    match convert(state, host, multipart, StreamFormat::Hls).await {
        Ok(url) => Json(HlsUrlResponse { hls_url: url }).into_response(),
        Err(e) => e.into_response(),
    }
}

#[utoipa::path(
    post,
    path = "/convert_to_hls_encrypted",
    request_body(content = String, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Conversion succeeded", body = EncryptedHlsUrlResponse),
        (status = 400, description = "Missing or empty upload", body = crate::common::response::ErrorResponse),
        (status = 500, description = "Conversion failed", body = crate::common::response::ErrorResponse)
    ),
    tag = "Packaging"
)]
pub async fn convert_to_hls_encrypted(
    State(state): State<AppState>,
    Host(host): Host,
    multipart: Multipart,
) -> impl IntoResponse {
    match convert(state, host, multipart, StreamFormat::HlsEncrypted).await {
        Ok(url) => Json(EncryptedHlsUrlResponse { encrypted_hls_url: url }).into_response(),
        Err(e) => e.into_response(),
    }
}

#[utoipa::path(
    post,
    path = "/convert_to_mpeg_dash",
    request_body(content = String, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Conversion succeeded", body = DashUrlResponse),
        (status = 400, description = "Missing or empty upload", body = crate::common::response::ErrorResponse),
        (status = 500, description = "Conversion failed", body = crate::common::response::ErrorResponse)
    ),
    tag = "Packaging"
)]
pub async fn convert_to_mpeg_dash(
    State(state): State<AppState>,
    Host(host): Host,
    multipart: Multipart,
) -> impl IntoResponse {
    match convert(state, host, multipart, StreamFormat::Dash).await {
        Ok(url) => Json(DashUrlResponse { dash_url: url }).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Shared conversion flow: resolve the base address, pull the `file` field
/// out of the multipart stream, and hand it to the packaging pipeline.
async fn convert(
    state: AppState,
    host: String,
    mut multipart: Multipart,
    format: StreamFormat,
) -> Result<String, PackagingError> {
    let base_url = state
        .config
        .public_base_url
        .clone()
        .unwrap_or_else(|| format!("http://{}", host));

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        PackagingError::InvalidInput(format!("malformed multipart request: {}", e))
    })? {
        let name = field.name().unwrap_or("").to_string();

        if name == "file" {
            info!("Received {:?} conversion request", format);
            return PackagingService::submit(state.clone(), field, format, &base_url).await;
        }
    }

    Err(PackagingError::InvalidInput(
        "no file field found in multipart request".to_string(),
    ))
}
