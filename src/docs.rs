use utoipa::OpenApi;
use crate::common::response::ErrorResponse;
use crate::modules::packaging::dto::*;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::packaging::handler::convert_to_hls,
        crate::modules::packaging::handler::convert_to_hls_encrypted,
        crate::modules::packaging::handler::convert_to_mpeg_dash,
    ),
    components(
        schemas(
            HlsUrlResponse,
            EncryptedHlsUrlResponse,
            DashUrlResponse,
            ErrorResponse,
        )
    ),
    tags(
        (name = "Packaging", description = "Video upload and stream packaging")
    )
)]
pub struct ApiDoc;
