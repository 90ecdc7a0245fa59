use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct HlsUrlResponse {
    pub hls_url: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct EncryptedHlsUrlResponse {
    pub encrypted_hls_url: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DashUrlResponse {
    pub dash_url: String,
}
