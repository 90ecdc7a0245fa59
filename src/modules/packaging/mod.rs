use axum::Router;
use axum::routing::post;

use crate::state::AppState;

pub mod dto;
pub mod encoder;
pub mod error;
pub mod handler;
pub mod keys;
pub mod model;
pub mod service;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/convert_to_hls", post(handler::convert_to_hls))
        .route("/convert_to_hls_encrypted", post(handler::convert_to_hls_encrypted))
        .route("/convert_to_mpeg_dash", post(handler::convert_to_mpeg_dash))
}
